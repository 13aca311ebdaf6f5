//! 4x4 transformation matrices.
//!
//! Convention: points are row vectors multiplied from the left,
//! `p' = p * M`, so `a.mul(&b)` applies `a` first and `b` second.
//! Storage is row-major (`rows[r][c]`).
//!
//! WebGL wants column-vector matrices in column-major order. The transpose
//! of a row-vector matrix is its column-vector form, and the column-major
//! flattening of that transpose equals the row-major flattening of the
//! row-vector matrix, so [`Mat4::to_gl`] hands the rows over as they are.

use super::{Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub rows: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.rows[3] = [x, y, z, 1.0];
        m
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.rows[0][0] = x;
        m.rows[1][1] = y;
        m.rows[2][2] = z;
        m
    }

    /// Mirror the z axis: view space looks down -z
    pub fn z_flip() -> Self {
        Self::scale(1.0, 1.0, -1.0)
    }

    /// Change of basis onto three orthonormal axes.
    ///
    /// The axes fill the first three columns, so `p * basis` yields
    /// `(p . x_axis, p . y_axis, p . z_axis)`.
    pub fn basis(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self {
            rows: [
                [x_axis.x, y_axis.x, z_axis.x, 0.0],
                [x_axis.y, y_axis.y, z_axis.y, 0.0],
                [x_axis.z, y_axis.z, z_axis.z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Counter-clockwise rotation by `angle` radians around `axis`.
    /// The axis is normalized here and must not be zero.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        let k = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Self {
            rows: [
                [c + t * k.x * k.x, s * k.z + t * k.x * k.y, -s * k.y + t * k.x * k.z, 0.0],
                [-s * k.z + t * k.x * k.y, c + t * k.y * k.y, s * k.x + t * k.y * k.z, 0.0],
                [s * k.y + t * k.x * k.z, -s * k.x + t * k.y * k.z, c + t * k.z * k.z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Perspective projection (OpenGL clip space, camera looking down -z)
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self {
            rows: [
                [f / aspect, 0.0, 0.0, 0.0],
                [0.0, f, 0.0, 0.0],
                [0.0, 0.0, (far + near) * nf, -1.0],
                [0.0, 0.0, 2.0 * far * near * nf, 0.0],
            ],
        }
    }

    /// Matrix product `self * other`
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut rows = [[0.0f32; 4]; 4];

        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[r][k] * other.rows[k][c]).sum();
            }
        }

        Self { rows }
    }

    /// `v * self`
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        let m = &self.rows;
        Vec4::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + v.w * m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + v.w * m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + v.w * m[3][2],
            v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + v.w * m[3][3],
        )
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform_vec4(Vec4::point(p)).xyz()
    }

    /// Transform a direction (ignores translation)
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        self.transform_vec4(Vec4::direction(d)).xyz()
    }

    /// Upper-left 3x3 block as row vectors
    pub fn rotation_rows(&self) -> [Vec3; 3] {
        let m = &self.rows;
        [
            Vec3::new(m[0][0], m[0][1], m[0][2]),
            Vec3::new(m[1][0], m[1][1], m[1][2]),
            Vec3::new(m[2][0], m[2][1], m[2][2]),
        ]
    }

    /// Column-major, column-vector layout for `uniformMatrix4fv`
    pub fn to_gl(&self) -> [f32; 16] {
        let mut out = [0.0f32; 16];
        for (r, row) in self.rows.iter().enumerate() {
            out[r * 4..r * 4 + 4].copy_from_slice(row);
        }
        out
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}
