use crate::coords::Affine;
use crate::device::{Device, DrawContext, ProgramHandle, TextureHandle};
use crate::frame::FrameState;

use super::event::{ComposeListeners, Immediate, RenderEvent, RenderEventKind};
use super::quad::{QuadBuffer, POSITION_OFFSET, TEX_COORD_OFFSET, VERTEX_COUNT, VERTEX_STRIDE};
use super::shader::{ShaderLocations, COMPOSE_FRAGMENT_SRC, COMPOSE_VERTEX_SRC};
use super::target::RenderTarget;

/// Per-layer snapshot consumed by the compose pipeline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerState {
    /// Layer opacity, uploaded to the compose shader unclamped.
    pub opacity: f32,
}

impl Default for LayerState {
    fn default() -> Self {
        Self { opacity: 1.0 }
    }
}

/// Shared compositing state of one layer renderer.
///
/// Owns the pieces every layer variant composites with: the static quad,
/// the off-screen render target, the matrix pair, the compose listeners,
/// and the single-slot shader-location cache. Variants embed a `Composer`
/// and implement [`LayerRenderer`] around it.
pub struct Composer {
    quad: QuadBuffer,
    target: RenderTarget,
    tex_coord_matrix: Affine,
    projection_matrix: Affine,
    /// Shader locations memoized per program identity; re-resolved only
    /// when the context hands back a different program.
    locations: Option<(ProgramHandle, ShaderLocations)>,
    listeners: ComposeListeners,
    events_dispatched: u64,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            quad: QuadBuffer::new(),
            target: RenderTarget::new(),
            tex_coord_matrix: Affine::IDENTITY,
            projection_matrix: Affine::IDENTITY,
            locations: None,
            listeners: ComposeListeners::new(),
            events_dispatched: 0,
        }
    }

    /// Binds the layer's render target for off-screen drawing, reallocating
    /// when `dimension` differs from the current target (see
    /// [`RenderTarget::bind`]).
    pub fn bind_framebuffer(&mut self, device: &dyn Device, frame: &mut FrameState, dimension: u32) {
        self.target.bind(device, frame, dimension);
    }

    /// Composites the render target onto the active surface.
    ///
    /// The caller must already have drawn the layer's content into the
    /// target this frame. Dispatches precompose, draws the textured quad
    /// with the layer's matrices and opacity, then dispatches postcompose.
    pub fn compose_frame(
        &mut self,
        frame: &FrameState,
        layer_state: &LayerState,
        context: &mut dyn DrawContext,
    ) {
        let Some(texture) = self.target.texture() else {
            log::warn!("compose_frame called without a render target; skipping");
            return;
        };

        self.dispatch_compose_event(RenderEventKind::Precompose, context.device(), frame);

        context.bind_buffer(&self.quad);

        let program = context.program(COMPOSE_VERTEX_SRC, COMPOSE_FRAGMENT_SRC);
        let locations = match self.locations {
            Some((cached, locations)) if cached == program => locations,
            _ => {
                let resolved = ShaderLocations::resolve(context.device(), program);
                self.locations = Some((program, resolved));
                resolved
            }
        };

        // Attribute wiring and the sampler unit survive on the device for as
        // long as the program stays active, which the context tracks across
        // every renderer sharing it.
        if context.use_program(program) {
            let device = context.device();
            device.enable_vertex_attrib(locations.a_position);
            device.vertex_attrib_pointer(locations.a_position, 2, VERTEX_STRIDE, POSITION_OFFSET);
            device.enable_vertex_attrib(locations.a_tex_coord);
            device.vertex_attrib_pointer(locations.a_tex_coord, 2, VERTEX_STRIDE, TEX_COORD_OFFSET);
            device.set_uniform_i32(locations.u_texture, 0);
        }

        let device = context.device();
        device.set_uniform_mat4(locations.u_tex_coord_matrix, &self.tex_coord_matrix.to_mat4());
        device.set_uniform_mat4(locations.u_projection_matrix, &self.projection_matrix.to_mat4());
        device.set_uniform_f32(locations.u_opacity, layer_state.opacity);
        device.bind_texture(texture);
        device.draw_triangle_strip(0, VERTEX_COUNT);

        self.dispatch_compose_event(RenderEventKind::Postcompose, context.device(), frame);
    }

    /// Sends a compose event to the layer's listeners.
    ///
    /// Fast path: with no listener for `kind`, neither the event nor the
    /// immediate helper is constructed.
    fn dispatch_compose_event(
        &mut self,
        kind: RenderEventKind,
        device: &dyn Device,
        frame: &FrameState,
    ) {
        if !self.listeners.has(kind) {
            return;
        }

        self.events_dispatched += 1;
        let mut event = RenderEvent {
            kind,
            frame,
            immediate: Immediate::new(device, frame),
        };
        self.listeners.dispatch(&mut event);
    }

    /// The render target's texture, or `None` before first allocation and
    /// after context loss.
    #[inline]
    pub fn texture(&self) -> Option<TextureHandle> {
        self.target.texture()
    }

    #[inline]
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Direct reference to the texture-coordinate matrix. Layer variants
    /// update it in place before each composite; no copy is made.
    #[inline]
    pub fn tex_coord_matrix(&self) -> &Affine {
        &self.tex_coord_matrix
    }

    #[inline]
    pub fn tex_coord_matrix_mut(&mut self) -> &mut Affine {
        &mut self.tex_coord_matrix
    }

    /// Direct reference to the projection matrix; same contract as
    /// [`tex_coord_matrix`](Self::tex_coord_matrix).
    #[inline]
    pub fn projection_matrix(&self) -> &Affine {
        &self.projection_matrix
    }

    #[inline]
    pub fn projection_matrix_mut(&mut self) -> &mut Affine {
        &mut self.projection_matrix
    }

    #[inline]
    pub fn listeners(&self) -> &ComposeListeners {
        &self.listeners
    }

    #[inline]
    pub fn listeners_mut(&mut self) -> &mut ComposeListeners {
        &mut self.listeners
    }

    /// Number of compose events constructed and dispatched so far. Stays at
    /// zero for layers without listeners.
    #[inline]
    pub fn events_dispatched(&self) -> u64 {
        self.events_dispatched
    }

    /// Handles abrupt device invalidation: forgets the render target
    /// without issuing device calls. Idempotent; callable mid-frame. The
    /// next [`bind_framebuffer`](Self::bind_framebuffer) reallocates
    /// regardless of the requested dimension.
    pub fn handle_context_lost(&mut self) {
        log::debug!("context lost; dropping render target handles");
        self.target.invalidate();
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability contract a layer variant implements around its [`Composer`].
///
/// The map orchestrator drives variants exclusively through this trait:
/// `prepare_frame`, then (if it returned `true`) content drawing into the
/// bound target, then `compose_frame`.
pub trait LayerRenderer {
    /// The shared compositing state this variant wraps.
    fn composer(&mut self) -> &mut Composer;

    /// Decides whether the layer needs compositing this frame, readying the
    /// render target if so (e.g. skip when content is unchanged or the
    /// layer is invisible).
    fn prepare_frame(
        &mut self,
        frame: &mut FrameState,
        layer_state: &LayerState,
        context: &mut dyn DrawContext,
    ) -> bool;

    /// Hit-tests the layer at `pixel`, invoking `callback` with the pixel's
    /// color data. `callback` returns `true` to stop; the method returns
    /// whether a callback stopped early.
    fn for_each_layer_at_pixel(
        &mut self,
        pixel: [f64; 2],
        frame: &FrameState,
        callback: &mut dyn FnMut(&[u8; 4]) -> bool,
    ) -> bool;

    /// Composites the prepared render target onto the active surface.
    fn compose_frame(
        &mut self,
        frame: &FrameState,
        layer_state: &LayerState,
        context: &mut dyn DrawContext,
    ) {
        self.composer().compose_frame(frame, layer_state, context);
    }

    /// Forwards device invalidation to the shared state.
    fn handle_context_lost(&mut self) {
        self.composer().handle_context_lost();
    }
}
