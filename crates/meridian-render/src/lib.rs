//! Meridian layer-rendering crate.
//!
//! This crate owns the GPU-backend compositing pieces driven by the map
//! orchestrator: per-layer off-screen render targets, the textured-quad
//! compose pipeline, and pre/post-compose event dispatch.
//!
//! The device itself is owned by the host engine and reached through the
//! seams in [`device`]; this crate never creates or destroys a context.

pub mod coords;
pub mod device;
pub mod frame;
pub mod logging;
pub mod render;
