//! Main GUI application loop.

use crate::controllers::interactive::ZoomController;
use crate::controllers::interactive::session::ExplorerSession;
use crate::core::compute::BackendKind;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::frame_surface::FrameSurface;
use crate::core::data::point::Point;
use crate::core::zoom::target::ZoomDirection;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::{debug, error, info, warn};
use std::error::Error;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{EventLoopBuilder, EventLoopWindowTarget},
    keyboard::Key,
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "Fractal Zoom";

/// Pointer travel, in pixels, before a left press counts as a drag.
const DRAG_THRESHOLD: i32 = 3;

struct DragState {
    origin: Point,
    last: Point,
    dragging: bool,
}

struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    controller: Arc<ZoomController>,
    benchmark: Option<JoinHandle<()>>,
    cursor: Option<Point>,
    drag: Option<DragState>,
    pending_size: Option<FrameSize>,
    mode: BackendKind,
    coordinates: Option<Complex>,
    last_render: Option<Duration>,
    status: Option<String>,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        presenter: PixelsPresenter,
        controller: Arc<ZoomController>,
    ) -> Self {
        let mode = controller.backend();

        Self {
            window,
            presenter,
            controller,
            benchmark: None,
            cursor: None,
            drag: None,
            pending_size: None,
            mode,
            coordinates: None,
            last_render: None,
            status: None,
        }
    }

    fn benchmark_in_progress(&self) -> bool {
        self.benchmark
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Runs `f` against the session unless a benchmark owns it.
    fn session_input<R>(&self, f: impl FnOnce(&mut ExplorerSession) -> R) -> Option<R> {
        if self.benchmark_in_progress() {
            debug!("input ignored while the benchmark runs");
            return None;
        }
        Some(self.controller.with_session(f))
    }

    fn update_title(&self) {
        let mut title = format!("{} | Mode: {}", WINDOW_TITLE, self.mode.display_name());

        if let Some(c) = self.coordinates {
            title.push_str(&format!(
                " | Mandelbrot coordinates X:{:.6} Y:{:.6}",
                c.real, c.imag
            ));
        }
        if let Some(render) = self.last_render {
            title.push_str(&format!(" | {} ms", render.as_millis()));
        }
        if let Some(status) = &self.status {
            title.push_str(" | ");
            title.push_str(status);
        }

        self.window.set_title(&title);
    }

    fn apply_update(&mut self) {
        let update = self.presenter.take_update();

        if let Some(frame) = update.frame {
            self.mode = frame.backend;
            self.last_render = Some(frame.render_duration);
            self.window.request_redraw();
        }
        if let Some(error) = update.error {
            self.status = Some(format!("Frame skipped: {}", error.message));
        }
        if let Some(status) = update.status {
            self.status = Some(status);
        }

        self.update_title();
    }

    fn apply_pending_resize(&mut self) {
        if self.benchmark_in_progress() {
            return;
        }
        if let Some(size) = self.pending_size.take() {
            self.controller.resize(size);
        }
    }

    fn start_benchmark(&mut self) {
        if self.benchmark_in_progress() {
            warn!("Experiment already running!");
            self.status = Some("Benchmark already running".to_string());
            self.update_title();
            return;
        }

        let controller = Arc::clone(&self.controller);
        let spawned = thread::Builder::new()
            .name("benchmark".to_string())
            .spawn(move || {
                let steps = controller.benchmark_settings().steps;
                if let Err(err) = controller.run_benchmark(steps) {
                    warn!("benchmark rejected: {}", err);
                }
            });

        match spawned {
            Ok(handle) => {
                self.benchmark = Some(handle);
                self.status = Some("Benchmark running".to_string());
            }
            Err(err) => {
                error!("benchmark thread could not start: {}", err);
                self.status = Some("Benchmark failed to start".to_string());
            }
        }
        self.update_title();
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        let Key::Character(text) = &event.logical_key else {
            return;
        };

        if text.as_str().eq_ignore_ascii_case("t") {
            if let Some(mode) = self.session_input(ExplorerSession::toggle_backend) {
                self.mode = mode;
                self.update_title();
            }
        } else if text.as_str().eq_ignore_ascii_case("e") {
            self.start_benchmark();
        }
    }

    fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let point = Point {
            x: position.x as i32,
            y: position.y as i32,
        };
        self.cursor = Some(point);

        let mut pan_by = None;
        if let Some(drag) = &mut self.drag {
            if !drag.dragging {
                let travelled = (point.x - drag.origin.x)
                    .abs()
                    .max((point.y - drag.origin.y).abs());
                drag.dragging = travelled > DRAG_THRESHOLD;
            }
            if drag.dragging {
                pan_by = Some((point.x - drag.last.x, point.y - drag.last.y));
                drag.last = point;
            }
        }
        if let Some((dx, dy)) = pan_by {
            self.session_input(|s| s.pan(f64::from(dx), f64::from(dy)));
        }

        if let Some(coordinates) = self.session_input(|s| s.pointer_coordinates(point)) {
            self.coordinates = coordinates;
            self.update_title();
        }
    }

    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let Some(point) = self.cursor else {
            return;
        };

        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                self.drag = Some(DragState {
                    origin: point,
                    last: point,
                    dragging: false,
                });
            }
            (MouseButton::Left, ElementState::Released) => {
                let dragged = self.drag.take().is_some_and(|drag| drag.dragging);
                if !dragged {
                    self.session_input(|s| s.select_point(point, ZoomDirection::In));
                }
            }
            (MouseButton::Right, ElementState::Pressed) => {
                self.session_input(|s| s.select_point(point, ZoomDirection::Out));
            }
            _ => {}
        }
    }

    fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        let Some(point) = self.cursor else {
            return;
        };

        let delta = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        if delta != 0.0 {
            self.session_input(|s| s.wheel(point, delta));
        }
    }

    fn shutdown(&mut self, elwt: &EventLoopWindowTarget<GuiEvent>) {
        self.presenter.close();
        self.controller.shutdown();
        elwt.exit();
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                self.shutdown(elwt);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.presenter.render() {
                    error!("Render error: {}", err);
                    self.shutdown(elwt);
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = self.presenter.resize(size.width, size.height) {
                    error!("Resize error: {}", err);
                    self.shutdown(elwt);
                    return;
                }
                self.pending_size = Some(FrameSize::new(size.width, size.height));
            }
            WindowEvent::CursorMoved { position, .. } => self.handle_cursor_moved(position),
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.drag = None;
            }
            WindowEvent::MouseInput { state, button, .. } => self.handle_mouse_input(state, button),
            WindowEvent::MouseWheel { delta, .. } => self.handle_wheel(delta),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            _ => {}
        }
    }

    fn handle_event(&mut self, event: Event<GuiEvent>, elwt: &EventLoopWindowTarget<GuiEvent>) {
        match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::UserEvent(GuiEvent::Wake) => self.apply_update(),
            Event::AboutToWait => self.apply_pending_resize(),
            _ => {}
        }
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    let surface = Arc::new(FrameSurface::new(FrameSize::new(size.width, size.height)));
    let adapter = Arc::new(PixelsAdapter::new(event_loop.create_proxy()));
    let presenter = PixelsPresenter::new(window, Arc::clone(&surface), adapter)?;

    let session = ExplorerSession::new(surface, presenter.share_adapter());
    let controller = Arc::new(ZoomController::new(session));
    controller.render();

    let mut app = GuiApp::new(window, presenter, controller);
    app.update_title();

    event_loop.run(move |event, elwt| app.handle_event(event, elwt))?;

    Ok(())
}
