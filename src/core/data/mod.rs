pub mod colour;
pub mod complex;
pub mod frame_size;
pub mod frame_surface;
pub mod iteration_buffer;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
