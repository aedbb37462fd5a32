//! Rotation about the star center.
//!
//! Wedges are generated by rotating the first wedge around the origin. The
//! matrix is stored row-major and follows the usual mathematical convention
//! (counter-clockwise positive angles, Y pointing up), which is also the
//! convention of the PostScript user space the wedges are emitted into:
//!
//! ```text
//! [cos  -sin] [x]
//! [sin   cos] [y]
//! ```

use super::types::{Point, Wedge};

/// A 2×2 rotation matrix about the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    /// Row-major entries `[m00, m01, m10, m11]`
    pub m: [f64; 4],
}

impl RotationMatrix {
    /// Build a rotation by `radians` (counter-clockwise positive)
    pub fn new(radians: f64) -> Self {
        let (sin_a, cos_a) = radians.sin_cos();
        Self {
            m: [cos_a, -sin_a, sin_a, cos_a],
        }
    }

    /// Rotate a single point around the origin
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.m[0] * p.x + self.m[1] * p.y,
            y: self.m[2] * p.x + self.m[3] * p.y,
        }
    }

    /// Rotate all three vertices of a wedge
    pub fn transform_wedge(&self, w: &Wedge) -> Wedge {
        Wedge {
            apex: self.transform_point(w.apex),
            upper: self.transform_point(w.upper),
            lower: self.transform_point(w.lower),
        }
    }
}
