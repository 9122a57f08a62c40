use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::zoom::settings::ZoomSettings;
use crate::core::zoom::target::ZoomDirection;

/// One animated zoom step: ease the center toward `target`, scale the half
/// extents and adjust the depth. Depth never drops below 1.
pub fn step_toward(
    viewport: &Viewport,
    target: Complex,
    direction: ZoomDirection,
    settings: &ZoomSettings,
) -> Result<Viewport, ViewportError> {
    let center = viewport.center() * (1.0 - settings.ease) + target * settings.ease;

    let (factor, depth) = match direction {
        ZoomDirection::In => (
            settings.zoom_in_factor,
            viewport.depth().saturating_add(settings.depth_step),
        ),
        ZoomDirection::Out => (
            settings.zoom_out_factor,
            viewport.depth().saturating_sub(settings.depth_step).max(1),
        ),
    };

    Viewport::new(
        center,
        viewport.half_width() * factor,
        viewport.half_height() * factor,
        depth,
    )
}

/// Recenters on `anchor`, then halves the extents for a positive wheel delta
/// or doubles them otherwise.
pub fn wheel_zoom(
    viewport: &Viewport,
    anchor: Complex,
    delta: f64,
    settings: &ZoomSettings,
) -> Result<Viewport, ViewportError> {
    let factor = if delta > 0.0 {
        1.0 / settings.wheel_factor
    } else {
        settings.wheel_factor
    };

    Viewport::new(
        anchor,
        viewport.half_width() * factor,
        viewport.half_height() * factor,
        viewport.depth(),
    )
}

/// Moves the view so the content follows a drag of `(dx, dy)` pixels.
pub fn pan(
    viewport: &Viewport,
    dx: f64,
    dy: f64,
    size: FrameSize,
) -> Result<Viewport, ViewportError> {
    if size.is_degenerate() {
        return Ok(*viewport);
    }

    let units_per_pixel_x = viewport.half_width() * 2.0 / f64::from(size.width());
    let units_per_pixel_y = viewport.half_height() * 2.0 / f64::from(size.height());
    let shift = Complex::new(-dx * units_per_pixel_x, -dy * units_per_pixel_y);

    Viewport::new(
        viewport.center() + shift,
        viewport.half_width(),
        viewport.half_height(),
        viewport.depth(),
    )
}
