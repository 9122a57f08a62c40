use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Pixel region that changed since the presentation side last looked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    #[must_use]
    pub fn full(size: FrameSize) -> Self {
        Self {
            x: 0,
            y: 0,
            width: size.width(),
            height: size.height(),
        }
    }

    fn union(self, other: Self) -> Self {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);

        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }
}

#[derive(Debug)]
struct SurfaceState {
    buffer: PixelBuffer,
    dirty: Option<DirtyRect>,
}

/// Shared presentation surface.
///
/// Renders write through a [`SurfaceLock`]; the window (or file writer) reads
/// the pixels and the accumulated dirty region.
#[derive(Debug)]
pub struct FrameSurface {
    state: Mutex<SurfaceState>,
}

impl FrameSurface {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                buffer: PixelBuffer::new(size),
                dirty: None,
            }),
        }
    }

    /// Exclusive write access, released when the returned guard drops.
    pub fn lock(&self) -> SurfaceLock<'_> {
        SurfaceLock {
            state: self.state.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.lock().size()
    }

    /// Replaces the buffer with a blank one of `size`. The whole new area is dirty.
    pub fn resize(&self, size: FrameSize) {
        let mut lock = self.lock();
        lock.state.buffer = PixelBuffer::new(size);
        lock.state.dirty = Some(DirtyRect::full(size));
    }

    /// Takes and clears the pending dirty region.
    pub fn take_dirty(&self) -> Option<DirtyRect> {
        self.lock().state.dirty.take()
    }

    /// Runs `read` against the current pixels while holding the surface.
    pub fn read<R>(&self, read: impl FnOnce(&PixelBuffer) -> R) -> R {
        let lock = self.lock();
        read(&lock.state.buffer)
    }
}

pub struct SurfaceLock<'a> {
    state: MutexGuard<'a, SurfaceState>,
}

impl SurfaceLock<'_> {
    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.state.buffer.size()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.state.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.state.buffer
    }

    pub fn add_dirty_rect(&mut self, rect: DirtyRect) {
        self.state.dirty = Some(match self.state.dirty {
            Some(existing) => existing.union(rect),
            None => rect,
        });
    }
}
