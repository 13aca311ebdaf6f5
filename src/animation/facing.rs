use crate::math::{Mat4, Vec3};

/// Axis-angle rotation turning the mesh's forward axis onto a heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facing {
    /// `reference x heading`, not normalized
    pub axis: Vec3,
    /// Radians in [0, PI]
    pub angle: f32,
}

impl Facing {
    pub fn between(reference: Vec3, heading: Vec3) -> Self {
        Self {
            axis: reference.cross(&heading),
            angle: reference.angle_between(&heading),
        }
    }

    /// Rotation matrix for this facing.
    ///
    /// A heading parallel or anti-parallel to the reference has a zero
    /// axis; that case gives the identity, which leaves an anti-parallel
    /// object pointing backwards.
    pub fn to_matrix(&self) -> Mat4 {
        if self.axis.length_squared() == 0.0 {
            return Mat4::identity();
        }
        Mat4::rotation_axis_angle(self.axis, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_reference_onto_heading() {
        let heading = Vec3::new(1.0, 1.0, 0.5).normalize();
        let facing = Facing::between(Vec3::FORWARD, heading);
        let turned = facing.to_matrix().transform_direction(Vec3::FORWARD);
        assert!((turned - heading).length() < 0.0001);
    }

    #[test]
    fn test_quarter_turn() {
        let facing = Facing::between(Vec3::FORWARD, Vec3::RIGHT);
        assert!((facing.angle - std::f32::consts::FRAC_PI_2).abs() < 0.0001);
        // forward x right = up
        assert!((facing.axis - Vec3::UP).length() < 0.0001);
    }

    #[test]
    fn test_parallel_heading_is_identity() {
        let facing = Facing::between(Vec3::FORWARD, Vec3::FORWARD);
        assert_eq!(facing.angle, 0.0);
        assert_eq!(facing.to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_anti_parallel_heading_is_identity() {
        let facing = Facing::between(Vec3::FORWARD, -Vec3::FORWARD);
        assert!((facing.angle - std::f32::consts::PI).abs() < 0.0001);
        assert_eq!(facing.to_matrix(), Mat4::identity());
    }
}
