pub mod compute_device;
