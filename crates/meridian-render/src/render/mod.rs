//! Layer compositing subsystem.
//!
//! Responsibilities:
//! - own the off-screen render target a layer draws into
//! - composite that target onto the active surface via a textured quad
//! - dispatch pre/post-compose events to layer listeners
//!
//! Per-frame flow, driven by the map orchestrator:
//! 1. `prepare_frame` (layer variant) decides whether to composite
//! 2. the variant binds the render target and draws layer content
//! 3. `compose_frame` draws the target's texture onto the surface
//!
//! Render-target destruction is always deferred to frame end through the
//! frame state's cleanup queue; handles superseded mid-frame may still be
//! referenced by in-flight draws.

mod event;
mod layer;
mod quad;
mod shader;
mod target;

pub use event::{ComposeListeners, Immediate, RenderEvent, RenderEventKind};
pub use layer::{Composer, LayerRenderer, LayerState};
pub use quad::{QuadBuffer, QuadVertex, POSITION_OFFSET, TEX_COORD_OFFSET, VERTEX_COUNT, VERTEX_STRIDE};
pub use shader::{ShaderLocations, COMPOSE_FRAGMENT_SRC, COMPOSE_VERTEX_SRC};
pub use target::RenderTarget;
