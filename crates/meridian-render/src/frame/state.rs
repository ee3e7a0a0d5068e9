use crate::coords::Extent;
use crate::device::Device;

use super::CleanupAction;

/// View parameters a frame was computed for.
///
/// Derivation (from map size, zoom, etc.) happens upstream; renderers treat
/// this as read-only.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    /// View center in map units.
    pub center: [f64; 2],
    /// Map units per physical pixel.
    pub resolution: f64,
    /// View rotation in radians, counter-clockwise.
    pub rotation: f64,
}

/// State for a single frame.
///
/// Lives for exactly one frame: built by the orchestrator, threaded through
/// every layer renderer, finalized with [`run_cleanup`](Self::run_cleanup).
#[derive(Debug)]
pub struct FrameState {
    pub view_state: ViewState,
    /// Physical-to-logical pixel ratio of the output surface.
    pub pixel_ratio: f64,
    /// Output surface size in physical pixels.
    pub size: [u32; 2],
    /// Map extent covered by the frame, in map units.
    pub extent: Extent,

    /// Deferred cleanup actions, executed in enqueue order at frame end.
    cleanup: Vec<CleanupAction>,
}

impl FrameState {
    pub fn new(view_state: ViewState, pixel_ratio: f64, size: [u32; 2], extent: Extent) -> Self {
        Self {
            view_state,
            pixel_ratio,
            size,
            extent,
            cleanup: Vec::new(),
        }
    }

    /// Appends `action` to the cleanup queue.
    ///
    /// Destruction of superseded GPU handles must go through here rather
    /// than happen synchronously: the old handles may still be referenced by
    /// in-flight draws from the same frame.
    pub fn defer_cleanup(&mut self, action: CleanupAction) {
        self.cleanup.push(action);
    }

    /// Number of queued cleanup actions.
    #[inline]
    pub fn pending_cleanup(&self) -> usize {
        self.cleanup.len()
    }

    /// Runs and drains the cleanup queue, in enqueue order.
    ///
    /// Call once, after all draws for the frame have been issued. Each
    /// action checks device liveness itself, so running after context loss
    /// drains the queue without issuing device calls.
    pub fn run_cleanup(&mut self, device: &dyn Device) {
        for action in self.cleanup.drain(..) {
            action.run(device);
        }
    }
}
