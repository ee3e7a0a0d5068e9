use crate::coords::Extent;
use crate::device::Device;
use crate::frame::FrameState;

/// Points in the compose pipeline at which layer listeners run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderEventKind {
    /// Before the layer's target is composited onto the surface.
    Precompose,
    /// After the composite draw.
    Postcompose,
}

/// Immediate-drawing helper handed to compose listeners.
///
/// Scoped to the view parameters of the current frame and the shared
/// device, so listeners can issue additional draws that line up with the
/// layer content. Listeners must not rebind the renderer's own render
/// target without restoring it before returning.
pub struct Immediate<'a> {
    device: &'a dyn Device,
    pub center: [f64; 2],
    pub resolution: f64,
    pub rotation: f64,
    /// Output surface size in physical pixels.
    pub size: [u32; 2],
    pub extent: Extent,
    pub pixel_ratio: f64,
}

impl<'a> Immediate<'a> {
    pub(crate) fn new(device: &'a dyn Device, frame: &FrameState) -> Self {
        Self {
            device,
            center: frame.view_state.center,
            resolution: frame.view_state.resolution,
            rotation: frame.view_state.rotation,
            size: frame.size,
            extent: frame.extent,
            pixel_ratio: frame.pixel_ratio,
        }
    }

    /// The device draws should be issued through.
    #[inline]
    pub fn device(&self) -> &dyn Device {
        self.device
    }
}

/// Event delivered synchronously to compose listeners.
pub struct RenderEvent<'a> {
    pub kind: RenderEventKind,
    pub frame: &'a FrameState,
    pub immediate: Immediate<'a>,
}

type Listener = Box<dyn FnMut(&mut RenderEvent<'_>)>;

/// Ordered pre/post-compose listener registry for one layer.
///
/// Dispatch is synchronous and in registration order. The registry exists
/// so the compose pipeline can take its zero-listener fast path: when a
/// kind has no listeners, no event or [`Immediate`] is ever constructed.
#[derive(Default)]
pub struct ComposeListeners {
    precompose: Vec<Listener>,
    postcompose: Vec<Listener>,
}

impl ComposeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for `kind`, after all existing listeners.
    pub fn on(&mut self, kind: RenderEventKind, listener: impl FnMut(&mut RenderEvent<'_>) + 'static) {
        self.bucket_mut(kind).push(Box::new(listener));
    }

    /// Whether any listener is registered for `kind`.
    #[inline]
    pub fn has(&self, kind: RenderEventKind) -> bool {
        !self.bucket(kind).is_empty()
    }

    /// Invokes every listener for the event's kind, in registration order.
    pub(crate) fn dispatch(&mut self, event: &mut RenderEvent<'_>) {
        for listener in self.bucket_mut(event.kind) {
            listener(&mut *event);
        }
    }

    fn bucket(&self, kind: RenderEventKind) -> &Vec<Listener> {
        match kind {
            RenderEventKind::Precompose => &self.precompose,
            RenderEventKind::Postcompose => &self.postcompose,
        }
    }

    fn bucket_mut(&mut self, kind: RenderEventKind) -> &mut Vec<Listener> {
        match kind {
            RenderEventKind::Precompose => &mut self.precompose,
            RenderEventKind::Postcompose => &mut self.postcompose,
        }
    }
}
