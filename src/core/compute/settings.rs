use crate::core::compute::devices::rayon_device::RAYON_DEVICE_ID;

/// How the bulk-parallel backend reaches its device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeSettings {
    /// Worker threads for the device pool; 0 means one per core.
    pub threads: usize,
    pub device_id: u32,
}

impl Default for ComputeSettings {
    fn default() -> Self {
        Self {
            threads: 0,
            device_id: RAYON_DEVICE_ID,
        }
    }
}
