use std::time::Duration;

/// Tuning for animated zooms and immediate wheel zooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    /// Ticks an animated zoom lasts after a selection.
    pub steps_per_selection: u32,
    /// Fraction of the way the center moves toward the target each tick.
    pub ease: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Added to the depth when zooming in, removed when zooming out.
    pub depth_step: u32,
    pub wheel_factor: f64,
    pub tick_interval: Duration,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            steps_per_selection: 10,
            ease: 0.2,
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
            depth_step: 2,
            wheel_factor: 2.0,
            tick_interval: Duration::from_millis(1),
        }
    }
}
