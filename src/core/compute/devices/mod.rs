pub mod rayon_device;
