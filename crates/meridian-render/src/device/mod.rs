//! Device and graphics-context seams.
//!
//! Responsibilities:
//! - opaque handle types for externally-owned GPU objects
//! - the [`Device`] trait: raw operations on the shared device
//! - the [`DrawContext`] trait: the program/buffer service layered on top
//!
//! This crate never creates a device. The host engine owns it, shares it
//! across all layer renderers in a frame, and may invalidate it at any time
//! (context loss); renderers must therefore treat every handle as revocable.

mod context;
mod handle;

#[cfg(test)]
pub(crate) mod mock;

pub use context::{Device, DrawContext};
pub use handle::{
    AttribLocation, BufferId, FramebufferHandle, ProgramHandle, TextureHandle, UniformLocation,
};
