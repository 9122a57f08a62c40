use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::frame_surface::FrameSurface;
use crate::presenters::pixels::adapter::{PendingUpdate, PixelsAdapter};
use log::debug;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::sync::Arc;
use winit::window::Window;

/// Copies the shared frame surface into a pixels framebuffer and presents it.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    surface: Arc<FrameSurface>,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        surface: Arc<FrameSurface>,
        adapter: Arc<PixelsAdapter>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            surface,
            adapter,
            width: size.width,
            height: size.height,
        })
    }

    pub fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    pub fn take_update(&self) -> PendingUpdate {
        self.adapter.take_update()
    }

    /// Presents the surface and acknowledges the frames it contained, so a
    /// waiting sync can continue. A minimised window acknowledges without
    /// drawing.
    pub fn render(&mut self) -> Result<(), pixels::Error> {
        let submitted = self.adapter.frames_submitted();

        if self.width == 0 || self.height == 0 {
            self.adapter.mark_displayed(submitted);
            return Ok(());
        }

        if self.surface.take_dirty().is_some() {
            self.copy_surface_into_frame();
        }

        let rendered = self.pixels.render();
        self.adapter.mark_displayed(submitted);
        rendered
    }

    /// Releases any render thread waiting for this window.
    pub fn close(&self) {
        self.adapter.close();
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)
    }

    fn copy_surface_into_frame(&mut self) {
        let frame = self.pixels.frame_mut();
        let copied = self.surface.read(|buffer| buffer.copy_to_rgba(frame));

        // The surface lags the window until the session has re-rendered at
        // the new size; that render marks the surface dirty again.
        if let Err(err) = copied {
            debug!("surface not presented: {}", err);
        }
    }
}
