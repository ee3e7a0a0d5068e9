use bytemuck::{Pod, Zeroable};

use crate::device::BufferId;

/// One vertex of the compose quad: interleaved position + texture
/// coordinate, 4 little-endian f32s.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Clip-space position.
    pub position: [f32; 2],
    /// Texture coordinate sampled from the layer's render target.
    pub tex_coord: [f32; 2],
}

/// Byte stride between consecutive vertices.
pub const VERTEX_STRIDE: u32 = std::mem::size_of::<QuadVertex>() as u32;

/// Byte offset of `position` within a vertex.
pub const POSITION_OFFSET: u32 = 0;

/// Byte offset of `tex_coord` within a vertex.
pub const TEX_COORD_OFFSET: u32 = 8;

/// Vertices per compose draw (triangle strip).
pub const VERTEX_COUNT: i32 = 4;

/// The static full-screen quad every layer composite draws.
///
/// Created once per renderer; contents never change. The id gives the
/// graphics-context service a stable cache key, so the upload happens once
/// per context rather than once per frame.
#[derive(Debug)]
pub struct QuadBuffer {
    id: BufferId,
    vertices: [QuadVertex; 4],
}

impl QuadBuffer {
    /// Triangle-strip order: bottom-left, bottom-right, top-left, top-right.
    pub const VERTICES: [QuadVertex; 4] = [
        QuadVertex { position: [-1.0, -1.0], tex_coord: [0.0, 0.0] },
        QuadVertex { position: [1.0, -1.0], tex_coord: [1.0, 0.0] },
        QuadVertex { position: [-1.0, 1.0], tex_coord: [0.0, 1.0] },
        QuadVertex { position: [1.0, 1.0], tex_coord: [1.0, 1.0] },
    ];

    pub fn new() -> Self {
        Self {
            id: BufferId::fresh(),
            vertices: Self::VERTICES,
        }
    }

    #[inline]
    pub fn id(&self) -> BufferId {
        self.id
    }

    #[inline]
    pub fn vertices(&self) -> &[QuadVertex; 4] {
        &self.vertices
    }

    /// Raw bytes for device upload, per the interleaved layout contract.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Default for QuadBuffer {
    fn default() -> Self {
        Self::new()
    }
}
