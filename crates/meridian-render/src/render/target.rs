use crate::device::{Device, FramebufferHandle, TextureHandle};
use crate::frame::{CleanupAction, FrameState};

/// A layer's off-screen render target: a square texture plus the
/// framebuffer that writes into it.
///
/// Invariant: texture, framebuffer, and dimension are all set or all unset.
/// At most one target is live per renderer; superseded handles are released
/// through the frame's deferred-cleanup queue, never synchronously.
#[derive(Debug, Default)]
pub struct RenderTarget {
    texture: Option<TextureHandle>,
    framebuffer: Option<FramebufferHandle>,
    dimension: Option<u32>,
}

impl RenderTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The target's texture, or `None` before first allocation and after
    /// context loss.
    #[inline]
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    #[inline]
    pub fn framebuffer(&self) -> Option<FramebufferHandle> {
        self.framebuffer
    }

    /// Side length of the square target, if allocated.
    #[inline]
    pub fn dimension(&self) -> Option<u32> {
        self.dimension
    }

    /// Binds the target for off-screen drawing, (re)allocating as needed.
    ///
    /// A matching `dimension` rebinds the existing framebuffer with no
    /// allocation and no cleanup traffic. A differing dimension (or an
    /// unallocated target) allocates a fresh texture + framebuffer pair and
    /// defers the release of the previous pair, if any, to frame end.
    pub fn bind(&mut self, device: &dyn Device, frame: &mut FrameState, dimension: u32) {
        debug_assert!(dimension > 0, "render target dimension must be positive");

        if self.dimension == Some(dimension) {
            device.bind_framebuffer(self.framebuffer);
            return;
        }

        if self.texture.is_some() || self.framebuffer.is_some() {
            log::debug!(
                "render target {:?} -> {} px; deferring release of previous handles",
                self.dimension,
                dimension
            );
            frame.defer_cleanup(CleanupAction::ReleaseRenderTarget {
                texture: self.texture.take(),
                framebuffer: self.framebuffer.take(),
            });
        }

        let texture = device.create_texture(dimension, dimension);
        let framebuffer = device.create_framebuffer();
        device.bind_framebuffer(Some(framebuffer));
        device.attach_color_texture(texture);

        self.texture = Some(texture);
        self.framebuffer = Some(framebuffer);
        self.dimension = Some(dimension);
    }

    /// Forgets all handles without issuing device calls.
    ///
    /// For context loss: the device no longer owns anything, so destruction
    /// would be invalid. The next [`bind`](Self::bind) reallocates
    /// regardless of the requested dimension. Idempotent.
    pub fn invalidate(&mut self) {
        self.texture = None;
        self.framebuffer = None;
        self.dimension = None;
    }
}
