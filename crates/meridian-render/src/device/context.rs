use super::{
    AttribLocation, FramebufferHandle, ProgramHandle, TextureHandle, UniformLocation,
};
use crate::render::QuadBuffer;

/// Raw operations on the externally-owned device.
///
/// Implementations issue the actual GPU calls; this crate only sequences
/// them. All methods take `&self`: the device is a stateful external object
/// shared across renderers, and interior mutability is the implementor's
/// concern.
///
/// Contract notes:
/// - Creation methods are infallible. On a lost context implementations
///   return placeholder handles; the caller detects loss separately and the
///   handles are never dereferenced by this crate.
/// - Location queries are only made for inputs that exist in the program
///   (the crate resolves its own embedded shader interface).
pub trait Device {
    /// Creates an empty `width` x `height` RGBA texture with linear min/mag
    /// filtering and clamp-to-edge wrapping.
    fn create_texture(&self, width: u32, height: u32) -> TextureHandle;

    fn create_framebuffer(&self) -> FramebufferHandle;

    /// Binds `framebuffer` as the draw target; `None` binds the default
    /// surface.
    fn bind_framebuffer(&self, framebuffer: Option<FramebufferHandle>);

    /// Attaches `texture` as the sole color attachment of the currently
    /// bound framebuffer.
    fn attach_color_texture(&self, texture: TextureHandle);

    fn delete_texture(&self, texture: TextureHandle);

    fn delete_framebuffer(&self, framebuffer: FramebufferHandle);

    /// Whether the device has been invalidated. Deferred cleanup consults
    /// this before issuing destruction calls.
    fn is_context_lost(&self) -> bool;

    fn attrib_location(&self, program: ProgramHandle, name: &str) -> AttribLocation;

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> UniformLocation;

    fn enable_vertex_attrib(&self, location: AttribLocation);

    /// Configures `location` to read `components` 32-bit floats per vertex
    /// from the bound vertex buffer, with `stride` and `offset` in bytes.
    fn vertex_attrib_pointer(&self, location: AttribLocation, components: u32, stride: u32, offset: u32);

    fn set_uniform_i32(&self, location: UniformLocation, value: i32);

    fn set_uniform_f32(&self, location: UniformLocation, value: f32);

    /// Uploads a column-major 4x4 matrix.
    fn set_uniform_mat4(&self, location: UniformLocation, value: &[f32; 16]);

    /// Binds `texture` to the active sampling unit.
    fn bind_texture(&self, texture: TextureHandle);

    /// Issues a triangle-strip draw of `count` vertices starting at `first`.
    fn draw_triangle_strip(&self, first: i32, count: i32);
}

/// Graphics-context service shared by all layer renderers in a frame.
///
/// Owns program compilation/caching and device-buffer caching; renderers
/// only hold the resulting handles. `use_program` carries the did-switch
/// signal renderers rely on to skip attribute rewiring.
pub trait DrawContext {
    /// The device this context issues calls through.
    fn device(&self) -> &dyn Device;

    /// Returns the compiled program for the given source pair, compiling on
    /// first use and caching thereafter. A recompile (e.g. after context
    /// loss) yields a new handle identity.
    fn program(&mut self, vertex_source: &str, fragment_source: &str) -> ProgramHandle;

    /// Activates `program` and returns whether the active program changed.
    ///
    /// The signal is context-global: any renderer switching programs through
    /// this context makes the next caller see `true`. Vertex-attribute state
    /// configured while a program was active persists until this returns
    /// `true` again.
    fn use_program(&mut self, program: ProgramHandle) -> bool;

    /// Binds `buffer` as the active vertex buffer, uploading its contents
    /// the first time each [`BufferId`](super::BufferId) is seen.
    fn bind_buffer(&mut self, buffer: &QuadBuffer);
}
