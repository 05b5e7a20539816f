use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size as `(width, height)` in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let phys  = self.window.inner_size();
        let scale = self.window.scale_factor();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(scale);
        (logi.width as f32, logi.height as f32)
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu:    &'a mut Gpu<'w>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires the next surface frame.
    ///
    /// Surface errors are resolved against the surface first; the returned
    /// action tells the caller whether to skip this frame or shut down.
    pub fn begin_frame(&mut self) -> Result<GpuFrame, SurfaceErrorAction> {
        match self.gpu.begin_frame() {
            Ok(frame) => Ok(frame),
            Err(err) => {
                log::debug!("surface error while acquiring frame: {err}");
                Err(self.gpu.handle_surface_error(err))
            }
        }
    }

    /// Submits `frame` and hands it to the compositor.
    pub fn present(&mut self, frame: GpuFrame) {
        self.window.window.pre_present_notify();
        self.gpu.submit(frame);
    }
}
