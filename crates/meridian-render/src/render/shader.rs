//! Default compose shader.
//!
//! Draws a layer's render-target texture as a full-screen quad, applying the
//! layer's texture-coordinate matrix, projection matrix, and opacity. The
//! graphics-context service owns compilation; this module only carries the
//! sources and the resolved input locations.

use crate::device::{AttribLocation, Device, ProgramHandle, UniformLocation};

pub const COMPOSE_VERTEX_SRC: &str = r#"
    attribute vec2 a_position;
    attribute vec2 a_tex_coord;

    uniform mat4 u_tex_coord_matrix;
    uniform mat4 u_projection_matrix;

    varying vec2 v_tex_coord;

    void main() {
        gl_Position = u_projection_matrix * vec4(a_position, 0.0, 1.0);
        v_tex_coord = (u_tex_coord_matrix * vec4(a_tex_coord, 0.0, 1.0)).st;
    }
"#;

pub const COMPOSE_FRAGMENT_SRC: &str = r#"
    precision mediump float;

    varying vec2 v_tex_coord;

    uniform sampler2D u_texture;
    uniform float u_opacity;

    void main() {
        vec4 color = texture2D(u_texture, v_tex_coord);
        gl_FragColor = vec4(color.rgb, color.a * u_opacity);
    }
"#;

/// Resolved input locations of the compose program.
///
/// Resolution walks the device once; renderers memoize the result per
/// program identity (see `Composer`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShaderLocations {
    pub a_position: AttribLocation,
    pub a_tex_coord: AttribLocation,
    pub u_texture: UniformLocation,
    pub u_tex_coord_matrix: UniformLocation,
    pub u_projection_matrix: UniformLocation,
    pub u_opacity: UniformLocation,
}

impl ShaderLocations {
    /// Resolves every compose-shader input from `program`.
    ///
    /// `program` must have been compiled from this module's sources, so all
    /// names are known to exist.
    pub fn resolve(device: &dyn Device, program: ProgramHandle) -> Self {
        Self {
            a_position: device.attrib_location(program, "a_position"),
            a_tex_coord: device.attrib_location(program, "a_tex_coord"),
            u_texture: device.uniform_location(program, "u_texture"),
            u_tex_coord_matrix: device.uniform_location(program, "u_tex_coord_matrix"),
            u_projection_matrix: device.uniform_location(program, "u_projection_matrix"),
            u_opacity: device.uniform_location(program, "u_opacity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::MockDevice;

    #[test]
    fn resolve_queries_each_input_once() {
        let device = MockDevice::new();
        let program = ProgramHandle::new(1);

        let locations = ShaderLocations::resolve(&device, program);

        assert_eq!(device.location_queries.get(), 6);
        // Distinct inputs resolve to distinct locations.
        assert_ne!(locations.a_position, locations.a_tex_coord);
        assert_ne!(locations.u_texture, locations.u_opacity);
    }

    #[test]
    fn sources_declare_the_resolved_names() {
        for name in ["a_position", "a_tex_coord", "u_tex_coord_matrix", "u_projection_matrix"] {
            assert!(COMPOSE_VERTEX_SRC.contains(name), "vertex source missing {name}");
        }
        for name in ["u_texture", "u_opacity"] {
            assert!(COMPOSE_FRAGMENT_SRC.contains(name), "fragment source missing {name}");
        }
    }
}
