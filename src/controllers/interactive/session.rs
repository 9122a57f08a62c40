use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, EscapeCount};
use crate::core::actions::render_frame::render_frame::{RenderFrameError, RenderStats, render_frame};
use crate::core::compute::{BackendKind, Backends};
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::frame_surface::FrameSurface;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_maps::hsv_hue::HsvHueColourMap;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::zoom::settings::ZoomSettings;
use crate::core::zoom::state::{ZoomState, ZoomTick};
use crate::core::zoom::step::{pan, step_toward, wheel_zoom};
use crate::core::zoom::target::ZoomDirection;
use log::{debug, info, warn};
use std::sync::Arc;

/// Everything one explorer window owns: the live viewport, the zoom
/// animation, the backend selection and the surface frames are drawn to.
///
/// All viewport mutation and every render goes through a session, and the
/// session lives behind a single mutex, so renders never interleave.
pub struct ExplorerSession {
    viewport: Viewport,
    zoom: ZoomState,
    settings: ZoomSettings,
    backend: BackendKind,
    backends: Backends,
    surface: Arc<FrameSurface>,
    colour_map: Box<dyn ColourMap<EscapeCount>>,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    generation: u64,
    frame_logging: bool,
}

impl ExplorerSession {
    pub fn new(
        surface: Arc<FrameSurface>,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        let colour_map: Box<dyn ColourMap<EscapeCount>> = Box::new(HsvHueColourMap);
        debug!("session colour map: {}", colour_map.display_name());

        Self {
            viewport: Viewport::default(),
            zoom: ZoomState::default(),
            settings: ZoomSettings::default(),
            backend: BackendKind::default(),
            backends: Backends::default(),
            surface,
            colour_map,
            presenter_port,
            generation: 0,
            frame_logging: true,
        }
    }

    #[must_use]
    pub fn with_backends(mut self, backends: Backends) -> Self {
        self.backends = backends;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ZoomSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    pub fn set_backend(&mut self, backend: BackendKind) {
        self.backend = backend;
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom.is_animating()
    }

    pub fn cancel_zoom(&mut self) {
        self.zoom.cancel();
    }

    #[must_use]
    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.surface.size()
    }

    #[must_use]
    pub fn surface(&self) -> &Arc<FrameSurface> {
        &self.surface
    }

    #[must_use]
    pub fn presenter_port(&self) -> &Arc<dyn InteractiveControllerPresenterPort> {
        &self.presenter_port
    }

    /// Generation of the most recent render attempt.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn frame_logging(&self) -> bool {
        self.frame_logging
    }

    /// Turns the per-frame timing line on or off.
    pub fn set_frame_logging(&mut self, enabled: bool) {
        self.frame_logging = enabled;
    }

    /// Renders the current viewport with the selected backend and tells the
    /// presenter about the outcome.
    pub fn render(&mut self) -> Result<RenderStats, RenderFrameError> {
        self.generation += 1;
        let backend = self.backends.get(self.backend);
        let result = render_frame(
            self.viewport,
            backend,
            &self.surface,
            self.colour_map.as_ref(),
        );

        match &result {
            Ok(stats) => {
                if self.frame_logging {
                    info!(
                        "{} render time: {} ms",
                        stats.backend.label(),
                        stats.elapsed.as_millis()
                    );
                }
                self.presenter_port.present(RenderEvent::Frame(FrameData {
                    generation: self.generation,
                    backend: stats.backend,
                    size: self.surface.size(),
                    render_duration: stats.elapsed,
                }));
            }
            Err(err) => {
                self.presenter_port.present(RenderEvent::Error(RenderError {
                    generation: self.generation,
                    backend: self.backend,
                    message: err.to_string(),
                }));
            }
        }

        result
    }

    /// Complex coordinate under `pixel`, or `None` outside the frame.
    #[must_use]
    pub fn pointer_coordinates(&self, pixel: Point) -> Option<Complex> {
        pixel_to_complex_coords(pixel, self.frame_size(), &self.viewport).ok()
    }

    /// Starts an animated zoom toward the point under `pixel`. Returns
    /// `false` when the pixel is outside the frame.
    pub fn select_point(&mut self, pixel: Point, direction: ZoomDirection) -> bool {
        let Some(target) = self.pointer_coordinates(pixel) else {
            debug!("ignoring selection at ({}, {}) outside the frame", pixel.x, pixel.y);
            return false;
        };

        self.zoom
            .select(target, direction, self.settings.steps_per_selection);
        true
    }

    /// Advances the zoom animation by one step and renders it. Returns
    /// whether the animation is still running.
    pub fn tick(&mut self) -> bool {
        match self.zoom.tick(&self.viewport, &self.settings) {
            ZoomTick::Idle => false,
            ZoomTick::Stepped(next) => {
                self.viewport = next;
                let _ = self.render();
                self.zoom.is_animating()
            }
            ZoomTick::Aborted(err) => {
                warn!("zoom animation stopped: {}", err);
                false
            }
        }
    }

    /// One animated zoom-in step toward `target` outside of the animation
    /// state machine, without rendering.
    pub fn advance_toward(&mut self, target: Complex) -> Result<(), ViewportError> {
        self.viewport = step_toward(&self.viewport, target, ZoomDirection::In, &self.settings)?;
        Ok(())
    }

    /// Immediate wheel zoom around the point under `pixel`, followed by one render.
    pub fn wheel(&mut self, pixel: Point, delta: f64) -> bool {
        let Some(anchor) = self.pointer_coordinates(pixel) else {
            return false;
        };

        self.apply_immediate(wheel_zoom(&self.viewport, anchor, delta, &self.settings))
    }

    /// Immediate drag of the view by a pixel delta, followed by one render.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        let size = self.frame_size();
        self.apply_immediate(pan(&self.viewport, dx, dy, size))
    }

    fn apply_immediate(&mut self, next: Result<Viewport, ViewportError>) -> bool {
        match next {
            Ok(viewport) => {
                self.viewport = viewport;
                let _ = self.render();
                true
            }
            Err(err) => {
                warn!("ignoring view change: {}", err);
                false
            }
        }
    }

    /// Switches to the other backend and renders with it.
    pub fn toggle_backend(&mut self) -> BackendKind {
        self.backend = self.backend.toggled();

        let status = format!("Mode: {}", self.backend.display_name());
        info!("{}", status);
        self.presenter_port.present(RenderEvent::Status(status));

        let _ = self.render();
        self.backend
    }

    /// Resizes the surface and redraws it.
    pub fn resize(&mut self, size: FrameSize) {
        self.surface.resize(size);
        if !size.is_degenerate() {
            let _ = self.render();
        }
    }
}
