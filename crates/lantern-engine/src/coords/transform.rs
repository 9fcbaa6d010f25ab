use std::ops::Mul;

/// Row-major 2x3 affine transform over `f64`.
///
/// The implicit third row is `[0, 0, 1]`, so the matrix maps a point as
/// `x' = m00*x + m01*y + m02`, `y' = m10*x + m11*y + m12`.
///
/// Composition via `*` follows scene-graph convention: `a * b` applies `b`
/// first, then `a`, so appending an operation on the right composes it in the
/// local (child) frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform(pub [[f64; 3]; 2]);

impl Transform {
    pub const IDENTITY: Self = Transform([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    /// Pure translation by `(dx, dy)`.
    #[inline]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Transform([[1.0, 0.0, dx], [0.0, 1.0, dy]])
    }

    /// Rotation about the origin, in radians.
    ///
    /// Maps `(1, 0)` to `(cos, sin)`; in the y-down pixel space this reads as
    /// a clockwise turn on screen.
    #[inline]
    pub fn rotate(radians: f64) -> Self {
        let c = radians.cos();
        let s = radians.sin();
        Transform([[c, -s, 0.0], [s, c, 0.0]])
    }

    /// Axis-aligned scale about the origin.
    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Transform([[sx, 0.0, 0.0], [0.0, sy, 0.0]])
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn apply(self, p: [f64; 2]) -> [f64; 2] {
        let m = self.0;
        [
            m[0][0] * p[0] + m[0][1] * p[1] + m[0][2],
            m[1][0] * p[0] + m[1][1] * p[1] + m[1][2],
        ]
    }

    /// Componentwise comparison within `tolerance`.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        let a = self.0;
        let b = other.0;
        for row in 0..2 {
            for col in 0..3 {
                if (a[row][col] - b[row][col]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        let a = self.0;
        let b = rhs.0;
        Transform([
            [
                a[0][0] * b[0][0] + a[0][1] * b[1][0],
                a[0][0] * b[0][1] + a[0][1] * b[1][1],
                a[0][0] * b[0][2] + a[0][1] * b[1][2] + a[0][2],
            ],
            [
                a[1][0] * b[0][0] + a[1][1] * b[1][0],
                a[1][0] * b[0][1] + a[1][1] * b[1][1],
                a[1][0] * b[0][2] + a[1][1] * b[1][2] + a[1][2],
            ],
        ])
    }
}
