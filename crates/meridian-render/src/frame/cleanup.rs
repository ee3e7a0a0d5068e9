use crate::device::{Device, FramebufferHandle, TextureHandle};

/// A deferred destruction step, enqueued during a frame and run after it.
///
/// Actions are tagged values rather than closures so the queue stays
/// inspectable. Each action is idempotent by construction: handles are
/// captured by value exactly once and the queue is drained on execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupAction {
    /// Releases the texture + framebuffer pair of a superseded render
    /// target. Either handle may be absent (partial targets never occur in
    /// steady state, but the action tolerates them).
    ReleaseRenderTarget {
        texture: Option<TextureHandle>,
        framebuffer: Option<FramebufferHandle>,
    },
}

impl CleanupAction {
    /// Executes the action against `device`.
    ///
    /// Skipped silently when the context is lost: the device owns nothing
    /// anymore and destruction calls would be invalid.
    pub fn run(self, device: &dyn Device) {
        if device.is_context_lost() {
            log::debug!("context lost; skipping deferred cleanup");
            return;
        }

        match self {
            CleanupAction::ReleaseRenderTarget { texture, framebuffer } => {
                if let Some(framebuffer) = framebuffer {
                    device.delete_framebuffer(framebuffer);
                }
                if let Some(texture) = texture {
                    device.delete_texture(texture);
                }
            }
        }
    }
}
