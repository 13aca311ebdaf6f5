//! Uniform cubic B-spline evaluation by basis-matrix multiplication.
//!
//! A segment `i` is shaped by control points `i..i + 4` and parameterized
//! locally by `t` in `[0, 1)`. With `T = [t^3, t^2, t, 1]` and `P` the 4x4
//! matrix whose rows are the segment's control points:
//!
//! ```text
//! position          = 1/6  * T        * BASIS    * P
//! tangent           = 1/10 * [t^2,t,1] * BASIS_D  * P
//! second derivative =        [t, 1]    * BASIS_DD * P
//! ```
//!
//! Each basis matrix has one row per power of `t` and one column per
//! control point, so column `j` holds the blending polynomial of point `j`.
//! For the position these are `(1-t)^3`, `3t^3 - 6t^2 + 4`,
//! `-3t^3 + 3t^2 + 3t + 1` and `t^3`, each over 6.
//!
//! Against the unscaled position columns, `BASIS_D` holds one third of
//! the first derivative and `BASIS_DD` one sixth of the second. With the
//! 1/10 scale the returned tangent is `0.2 * dP/dt`, and the second
//! derivative comes out exact.

use super::{Vec3, Vec4};

/// Position basis, rows for `t^3, t^2, t, 1`
pub const BASIS: [[f32; 4]; 4] = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 0.0, 3.0, 0.0],
    [1.0, 4.0, 1.0, 0.0],
];

/// First-derivative basis, rows for `t^2, t, 1`
pub const BASIS_D: [[f32; 4]; 3] = [
    [-1.0, 3.0, -3.0, 1.0],
    [2.0, -4.0, 2.0, 0.0],
    [-1.0, 0.0, 1.0, 0.0],
];

/// Second-derivative basis, rows for `t, 1`
pub const BASIS_DD: [[f32; 4]; 2] = [
    [-1.0, 3.0, -3.0, 1.0],
    [1.0, -2.0, 1.0, 0.0],
];

pub const POSITION_SCALE: f32 = 1.0 / 6.0;
pub const TANGENT_SCALE: f32 = 1.0 / 10.0;

/// Evaluation result for one parameter value on one segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPoint {
    pub position: Vec3,
    /// Scaled first derivative, not normalized
    pub tangent: Vec3,
    /// Second derivative, not normalized
    pub second_derivative: Vec3,
}

/// Uniform cubic B-spline over homogeneous control points
#[derive(Debug, Clone)]
pub struct UniformBSpline {
    control_points: Vec<Vec4>,
}

impl UniformBSpline {
    pub fn new(control_points: Vec<Vec4>) -> Self {
        Self { control_points }
    }

    pub fn control_points(&self) -> &[Vec4] {
        &self.control_points
    }

    /// Number of segments, `n - 3` for `n >= 4` control points
    pub fn segment_count(&self) -> usize {
        self.control_points.len().saturating_sub(3)
    }

    /// Evaluate segment `segment` at local parameter `t`.
    ///
    /// # Panics
    ///
    /// If `segment` is not a valid segment index or `t` is outside
    /// `[0, 1)`. Callers derive both from the curve itself, so either
    /// case is a bug in the caller.
    pub fn evaluate(&self, segment: usize, t: f32) -> SegmentPoint {
        assert!(
            segment < self.segment_count(),
            "segment {} out of range for {} control points",
            segment,
            self.control_points.len()
        );
        assert!((0.0..1.0).contains(&t), "parameter t = {} outside [0, 1)", t);

        let t2 = t * t;
        let t3 = t2 * t;
        let points = &self.control_points[segment..segment + 4];

        let position = blend(&[t3, t2, t, 1.0].map(|v| v * POSITION_SCALE), &BASIS, points);
        let tangent = blend(&[t2, t, 1.0].map(|v| v * TANGENT_SCALE), &BASIS_D, points);
        let second_derivative = blend(&[t, 1.0], &BASIS_DD, points);

        SegmentPoint {
            position,
            tangent,
            second_derivative,
        }
    }
}

/// `powers * basis * points`, keeping only x, y, z of the result
fn blend<const N: usize>(powers: &[f32; N], basis: &[[f32; 4]; N], points: &[Vec4]) -> Vec3 {
    points
        .iter()
        .enumerate()
        .fold(Vec3::ZERO, |acc, (j, p)| {
            let weight: f32 = powers.iter().zip(basis.iter()).map(|(tp, row)| tp * row[j]).sum();
            acc + p.xyz().scale(weight)
        })
}
