use std::ops::{Add, Sub, Mul, Neg};
use serde::Deserialize;

/// 3D vector for positions and directions
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const RIGHT: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const FORWARD: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit vector in the same direction.
    ///
    /// There is no zero-length guard: a zero vector comes back as NaN
    /// components. Curve frames rely on this to expose degenerate
    /// geometry instead of hiding it.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        Self {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    pub fn scale(&self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Unsigned angle to another vector in radians, in [0, PI]
    pub fn angle_between(&self, other: &Self) -> f32 {
        let cos = self.normalize().dot(&other.normalize());
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Rotate counter-clockwise around `axis` (Rodrigues' formula).
    /// The axis does not need to be unit length.
    pub fn rotate_about(&self, axis: &Self, angle: f32) -> Self {
        let k = axis.normalize();
        let (sin, cos) = angle.sin_cos();
        self.scale(cos) + k.cross(self).scale(sin) + k.scale(k.dot(self) * (1.0 - cos))
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        self.scale(scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_length() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.length() - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_vec3_normalize() {
        let n = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert!((n.length() - 1.0).abs() < 0.0001);
        assert!((n.x - 0.6).abs() < 0.0001);
        assert!((n.y - 0.8).abs() < 0.0001);
    }

    #[test]
    fn test_vec3_normalize_zero_is_not_finite() {
        assert!(!Vec3::ZERO.normalize().is_finite());
    }

    #[test]
    fn test_vec3_cross() {
        let c = Vec3::RIGHT.cross(&Vec3::UP);
        assert!((c.z - 1.0).abs() < 0.0001);
        assert!(c.x.abs() < 0.0001 && c.y.abs() < 0.0001);
    }

    #[test]
    fn test_vec3_angle_between() {
        let a = Vec3::FORWARD.angle_between(&Vec3::RIGHT);
        assert!((a - std::f32::consts::FRAC_PI_2).abs() < 0.0001);

        let b = Vec3::FORWARD.angle_between(&Vec3::new(0.0, 0.0, -3.0));
        assert!((b - std::f32::consts::PI).abs() < 0.0001);
    }

    #[test]
    fn test_vec3_rotate_about() {
        // Quarter turn of +x around +z lands on +y
        let r = Vec3::RIGHT.rotate_about(&Vec3::new(0.0, 0.0, 2.0), std::f32::consts::FRAC_PI_2);
        assert!(r.x.abs() < 0.0001);
        assert!((r.y - 1.0).abs() < 0.0001);
        assert!(r.z.abs() < 0.0001);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!((a + b).x, 5.0);
        assert_eq!((b - a).x, 3.0);
        assert_eq!((a * 2.0).z, 6.0);
        assert_eq!((-a).y, -2.0);
        assert!((a.dot(&b) - 32.0).abs() < 0.0001);
        assert!((a.lerp(&b, 0.5).y - 3.5).abs() < 0.0001);
    }
}
