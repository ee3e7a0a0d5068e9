use std::sync::atomic::{AtomicU32, Ordering};

macro_rules! device_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }
    };
}

device_handle! {
    /// Opaque handle to a device texture. "Unset" is `Option::None`.
    TextureHandle
}

device_handle! {
    /// Opaque handle to a device framebuffer. "Unset" is `Option::None`.
    FramebufferHandle
}

device_handle! {
    /// Opaque handle to a compiled, linked shader program.
    ///
    /// Equality is program identity: a recompile yields a new handle, which
    /// is what invalidates per-renderer location caches.
    ProgramHandle
}

device_handle! {
    /// Resolved vertex-attribute location within a program.
    AttribLocation
}

device_handle! {
    /// Resolved uniform location within a program.
    UniformLocation
}

/// Identity of a CPU-side vertex buffer.
///
/// The graphics-context service keys its device-buffer cache on this id, so
/// rebinding the same buffer every frame uploads nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BufferId(u32);

static NEXT_BUFFER_ID: AtomicU32 = AtomicU32::new(1);

impl BufferId {
    /// Returns a process-unique id.
    pub fn fresh() -> Self {
        Self(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}
