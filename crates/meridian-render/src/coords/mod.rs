//! Coordinate and transform types shared across layer renderers.
//!
//! Canonical spaces:
//! - Map coordinates (f64, projection units)
//! - Clip space after the projection matrix (+X right, +Y up)
//!
//! Renderers keep their matrices in 2D affine form and expand to 4x4
//! homogeneous form only at uniform upload.

mod affine;

pub use affine::Affine;

/// Map extent as `[min_x, min_y, max_x, max_y]` in map units.
pub type Extent = [f64; 4];
