//! Recording device/context doubles for unit tests.
//!
//! `MockDevice` assigns sequential handles and records every call in order;
//! tests assert on the recorded stream instead of a live GPU.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{
    AttribLocation, BufferId, Device, DrawContext, FramebufferHandle, ProgramHandle,
    TextureHandle, UniformLocation,
};
use crate::render::QuadBuffer;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DeviceCall {
    CreateTexture { width: u32, height: u32 },
    CreateFramebuffer,
    BindFramebuffer(Option<FramebufferHandle>),
    AttachColorTexture(TextureHandle),
    DeleteTexture(TextureHandle),
    DeleteFramebuffer(FramebufferHandle),
    EnableVertexAttrib(AttribLocation),
    VertexAttribPointer { location: AttribLocation, components: u32, stride: u32, offset: u32 },
    UniformI32 { location: UniformLocation, value: i32 },
    UniformF32 { location: UniformLocation, value: f32 },
    UniformMat4 { location: UniformLocation, value: [f32; 16] },
    BindTexture(TextureHandle),
    DrawTriangleStrip { first: i32, count: i32 },
}

#[derive(Default)]
pub(crate) struct MockDevice {
    next_handle: Cell<u32>,
    lost: Cell<bool>,
    locations: RefCell<HashMap<(ProgramHandle, String), u32>>,
    pub location_queries: Cell<u32>,
    pub calls: RefCell<Vec<DeviceCall>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_lost(&self, lost: bool) {
        self.lost.set(lost);
    }

    pub fn recorded(&self) -> Vec<DeviceCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&DeviceCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matches(c)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn fresh(&self) -> u32 {
        let raw = self.next_handle.get() + 1;
        self.next_handle.set(raw);
        raw
    }

    fn record(&self, call: DeviceCall) {
        self.calls.borrow_mut().push(call);
    }

    fn location_raw(&self, program: ProgramHandle, name: &str) -> u32 {
        self.location_queries.set(self.location_queries.get() + 1);
        let mut locations = self.locations.borrow_mut();
        let next = locations.len() as u32;
        *locations
            .entry((program, name.to_owned()))
            .or_insert(next)
    }
}

impl Device for MockDevice {
    fn create_texture(&self, width: u32, height: u32) -> TextureHandle {
        self.record(DeviceCall::CreateTexture { width, height });
        TextureHandle::new(self.fresh())
    }

    fn create_framebuffer(&self) -> FramebufferHandle {
        self.record(DeviceCall::CreateFramebuffer);
        FramebufferHandle::new(self.fresh())
    }

    fn bind_framebuffer(&self, framebuffer: Option<FramebufferHandle>) {
        self.record(DeviceCall::BindFramebuffer(framebuffer));
    }

    fn attach_color_texture(&self, texture: TextureHandle) {
        self.record(DeviceCall::AttachColorTexture(texture));
    }

    fn delete_texture(&self, texture: TextureHandle) {
        self.record(DeviceCall::DeleteTexture(texture));
    }

    fn delete_framebuffer(&self, framebuffer: FramebufferHandle) {
        self.record(DeviceCall::DeleteFramebuffer(framebuffer));
    }

    fn is_context_lost(&self) -> bool {
        self.lost.get()
    }

    fn attrib_location(&self, program: ProgramHandle, name: &str) -> AttribLocation {
        AttribLocation::new(self.location_raw(program, name))
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> UniformLocation {
        UniformLocation::new(self.location_raw(program, name))
    }

    fn enable_vertex_attrib(&self, location: AttribLocation) {
        self.record(DeviceCall::EnableVertexAttrib(location));
    }

    fn vertex_attrib_pointer(
        &self,
        location: AttribLocation,
        components: u32,
        stride: u32,
        offset: u32,
    ) {
        self.record(DeviceCall::VertexAttribPointer { location, components, stride, offset });
    }

    fn set_uniform_i32(&self, location: UniformLocation, value: i32) {
        self.record(DeviceCall::UniformI32 { location, value });
    }

    fn set_uniform_f32(&self, location: UniformLocation, value: f32) {
        self.record(DeviceCall::UniformF32 { location, value });
    }

    fn set_uniform_mat4(&self, location: UniformLocation, value: &[f32; 16]) {
        self.record(DeviceCall::UniformMat4 { location, value: *value });
    }

    fn bind_texture(&self, texture: TextureHandle) {
        self.record(DeviceCall::BindTexture(texture));
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.record(DeviceCall::DrawTriangleStrip { first, count });
    }
}

/// Mock graphics-context service: caches programs per source pair and
/// tracks the context-global active program for the did-switch signal.
#[derive(Default)]
pub(crate) struct MockContext {
    pub device: MockDevice,
    programs: RefCell<HashMap<(String, String), ProgramHandle>>,
    next_program: Cell<u32>,
    active: Cell<Option<ProgramHandle>>,
    pub bound_buffers: RefCell<Vec<BufferId>>,
}

impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops compiled programs so the next lookup yields a fresh identity,
    /// as a recompile after context loss would.
    pub fn recompile_programs(&self) {
        self.programs.borrow_mut().clear();
    }

    /// Activates an unrelated program, as another renderer sharing this
    /// context would between composes.
    pub fn activate_foreign_program(&mut self) {
        let raw = self.next_program.get() + 1;
        self.next_program.set(raw);
        self.active.set(Some(ProgramHandle::new(raw)));
    }
}

impl DrawContext for MockContext {
    fn device(&self) -> &dyn Device {
        &self.device
    }

    fn program(&mut self, vertex_source: &str, fragment_source: &str) -> ProgramHandle {
        let key = (vertex_source.to_owned(), fragment_source.to_owned());
        if let Some(&program) = self.programs.borrow().get(&key) {
            return program;
        }
        let raw = self.next_program.get() + 1;
        self.next_program.set(raw);
        let program = ProgramHandle::new(raw);
        self.programs.borrow_mut().insert(key, program);
        program
    }

    fn use_program(&mut self, program: ProgramHandle) -> bool {
        let switched = self.active.get() != Some(program);
        self.active.set(Some(program));
        switched
    }

    fn bind_buffer(&mut self, buffer: &QuadBuffer) {
        self.bound_buffers.borrow_mut().push(buffer.id());
    }
}
