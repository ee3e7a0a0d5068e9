/// 2D affine transform stored as `[a, b, c, d, e, f]`.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)` — the upper-left 2x2
/// block plus the translation column of a 3x3 homogeneous matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    coeffs: [f64; 6],
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        coeffs: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            coeffs: [a, b, c, d, e, f],
        }
    }

    #[inline]
    pub const fn coefficients(self) -> [f64; 6] {
        self.coeffs
    }

    /// Resets to the identity transform in place.
    #[inline]
    pub fn reset(&mut self) {
        *self = Affine::IDENTITY;
    }

    /// Multiplies in place: `self = self * other` (`other` applies first).
    pub fn multiply(&mut self, other: Affine) {
        let [a1, b1, c1, d1, e1, f1] = self.coeffs;
        let [a2, b2, c2, d2, e2, f2] = other.coeffs;

        self.coeffs = [
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        ];
    }

    /// Appends a translation by `(dx, dy)`.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.multiply(Affine::new(1.0, 0.0, 0.0, 1.0, dx, dy));
    }

    /// Appends a scale by `(sx, sy)`.
    #[inline]
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.multiply(Affine::new(sx, 0.0, 0.0, sy, 0.0, 0.0));
    }

    /// Appends a counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        self.multiply(Affine::new(cos, sin, -sin, cos, 0.0, 0.0));
    }

    /// Rebuilds the transform as
    /// `translate(dx1, dy1) * scale(sx, sy) * rotate(angle) * translate(dx2, dy2)`.
    ///
    /// This is the form layer renderers use each frame: `(dx1, dy1)` places
    /// the view center, `(dx2, dy2)` recenters map coordinates around it.
    pub fn compose(
        &mut self,
        dx1: f64,
        dy1: f64,
        sx: f64,
        sy: f64,
        angle: f64,
        dx2: f64,
        dy2: f64,
    ) {
        let (sin, cos) = angle.sin_cos();

        self.coeffs = [
            sx * cos,
            sy * sin,
            -sx * sin,
            sy * cos,
            dx2 * sx * cos - dy2 * sx * sin + dx1,
            dx2 * sy * sin + dy2 * sy * cos + dy1,
        ];
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn apply(&self, point: [f64; 2]) -> [f64; 2] {
        let [a, b, c, d, e, f] = self.coeffs;
        let [x, y] = point;
        [a * x + c * y + e, b * x + d * y + f]
    }

    /// Expands to a column-major 4x4 homogeneous matrix for uniform upload.
    ///
    /// The identity affine expands to the 4x4 identity.
    #[rustfmt::skip]
    pub fn to_mat4(&self) -> [f32; 16] {
        let [a, b, c, d, e, f] = self.coeffs;
        [
            a as f32, b as f32, 0.0, 0.0,
            c as f32, d as f32, 0.0, 0.0,
            0.0,      0.0,      1.0, 0.0,
            e as f32, f as f32, 0.0, 1.0,
        ]
    }
}

impl Default for Affine {
    #[inline]
    fn default() -> Self {
        Affine::IDENTITY
    }
}
