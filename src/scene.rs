//! The whole mutable state of the viewer in one place
//!
//! Built once from the input text, then driven by two entry points:
//! `update` on every frame tick and `handle_key` on every key press.

use crate::animation::{Facing, FlightAnimation, ObjectPose};
use crate::camera::{CameraCommand, CameraState};
use crate::curve::SampledCurve;
use crate::data::{parse_control_points, parse_obj, DisplayConfig, LoadError, LoadResult, SceneConfig};
use crate::math::{Mat4, UniformBSpline};
use crate::mesh::Mesh;

/// What a key press changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The camera moved or turned
    Camera,
    /// Frame vector visibility changed
    Display,
    Ignored,
}

pub struct SceneState {
    config: SceneConfig,
    camera: CameraState,
    spline: UniformBSpline,
    curve: SampledCurve,
    mesh: Mesh,
    animation: FlightAnimation,
    display: DisplayConfig,
}

impl SceneState {
    /// Load both input files and precompute the curve samples
    pub fn from_sources(config: SceneConfig, control_points: &str, mesh: &str) -> LoadResult<Self> {
        config.validate()?;

        let points = parse_control_points(control_points)?;
        if points.len() < 4 {
            return Err(LoadError::TooFewControlPoints(points.len()));
        }
        let mesh = parse_obj(mesh)?;

        let spline = UniformBSpline::new(points);
        let curve = SampledCurve::build(&spline, config.samples_per_segment);
        let animation = FlightAnimation::for_curve(&curve, config.object_speed);

        log::info!(
            "scene loaded: {} control points, {} segments, {} samples, {} vertices, {} triangles",
            spline.control_points().len(),
            spline.segment_count(),
            curve.len(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(Self {
            camera: CameraState::from_config(&config.camera),
            display: config.display,
            config,
            spline,
            curve,
            mesh,
            animation,
        })
    }

    /// Frame tick: advance the flight by `delta_ms` milliseconds
    pub fn update(&mut self, delta_ms: f32) {
        self.animation.advance(delta_ms);
    }

    /// Put the object back at the start of the curve
    pub fn restart(&mut self) {
        self.animation.reset();
    }

    pub fn handle_key(&mut self, key: char) -> KeyOutcome {
        if let Some(command) = CameraCommand::from_key(key) {
            self.camera.apply(command);
            return KeyOutcome::Camera;
        }

        match key {
            'n' => {
                self.display.show_normals = !self.display.show_normals;
                log::debug!("normals {}", if self.display.show_normals { "on" } else { "off" });
                KeyOutcome::Display
            }
            'b' => {
                self.display.show_binormals = !self.display.show_binormals;
                log::debug!("binormals {}", if self.display.show_binormals { "on" } else { "off" });
                KeyOutcome::Display
            }
            _ => KeyOutcome::Ignored,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn object_pose(&self) -> ObjectPose {
        self.animation.pose(&self.curve, self.mesh.center())
    }

    /// Model matrix of the object: turn to face the heading, then move
    /// by the pose offset
    pub fn object_transform(&self) -> Mat4 {
        let pose = self.object_pose();
        let rotation = Facing::between(self.config.object_forward, pose.heading).to_matrix();
        rotation.mul(&Mat4::translation(pose.offset.x, pose.offset.y, pose.offset.z))
    }

    /// Perspective projection for a viewport of the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let p = &self.config.projection;
        Mat4::perspective(p.fov_degrees.to_radians(), aspect, p.near, p.far)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn spline(&self) -> &UniformBSpline {
        &self.spline
    }

    pub fn curve(&self) -> &SampledCurve {
        &self.curve
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn animation(&self) -> &FlightAnimation {
        &self.animation
    }

    pub fn display(&self) -> DisplayConfig {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    const LINE: &str = "0 0 0\n1 0 0\n2 0 0\n3 0 0\n4 0 0\n";
    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    fn scene() -> SceneState {
        SceneState::from_sources(SceneConfig::default(), LINE, TRIANGLE).unwrap()
    }

    #[test]
    fn test_load() {
        let scene = scene();
        assert_eq!(scene.spline().segment_count(), 2);
        assert_eq!(scene.curve().len(), 10);
        assert_eq!(scene.mesh().triangles(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_too_few_control_points() {
        let result = SceneState::from_sources(SceneConfig::default(), "0 0 0\n1 1 1\n2 2 2\n", TRIANGLE);
        assert!(matches!(result, Err(LoadError::TooFewControlPoints(3))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SceneConfig {
            samples_per_segment: 0,
            ..Default::default()
        };
        let result = SceneState::from_sources(config, LINE, TRIANGLE);
        assert!(matches!(result, Err(LoadError::InvalidConfig(_))));

        let config = SceneConfig {
            object_speed: f32::NAN,
            ..Default::default()
        };
        let result = SceneState::from_sources(config, LINE, TRIANGLE);
        assert!(matches!(result, Err(LoadError::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_mesh_is_reported() {
        let result = SceneState::from_sources(SceneConfig::default(), LINE, "v 0 0 0\nf 1 2 3\n");
        assert!(matches!(result, Err(LoadError::FaceIndex { .. })));
    }

    #[test]
    fn test_update_moves_object() {
        let mut scene = scene();
        let before = scene.object_pose().offset;
        scene.update(500.0);
        assert_eq!(scene.animation().position(), 2.5);
        let after = scene.object_pose().offset;
        assert!(after.x > before.x);
    }

    #[test]
    fn test_flight_ends() {
        let mut scene = scene();
        for _ in 0..100 {
            scene.update(100.0);
        }
        assert!(scene.animation().is_done());
        assert!(scene.animation().position() < 9.0);
    }

    #[test]
    fn test_restart() {
        let mut scene = scene();
        scene.update(100_000.0);
        assert!(scene.animation().is_done());
        scene.restart();
        assert!(!scene.animation().is_done());
        assert_eq!(scene.animation().position(), 0.0);
    }

    #[test]
    fn test_object_transform_rotates_about_origin_then_offsets() {
        let scene = scene();
        // Heading is +x, forward is +z: quarter turn around +y
        let center = scene.mesh().center().xyz();
        let m = scene.object_transform();
        let facing = Facing::between(Vec3::FORWARD, Vec3::RIGHT).to_matrix();
        let offset = scene.object_pose().offset;
        let expected = facing.transform_point(center) + offset.xyz();
        assert!((m.transform_point(center) - expected).length() < 0.0001);

        let nose = m.transform_direction(Vec3::FORWARD);
        assert!((nose - Vec3::RIGHT).length() < 0.0001);
    }

    #[test]
    fn test_keys() {
        let mut scene = scene();
        assert_eq!(scene.handle_key('w'), KeyOutcome::Camera);
        assert!((scene.camera().eye.z - 0.3).abs() < 0.0001);

        assert!(!scene.display().show_normals);
        assert_eq!(scene.handle_key('n'), KeyOutcome::Display);
        assert!(scene.display().show_normals);
        assert_eq!(scene.handle_key('b'), KeyOutcome::Display);
        assert!(scene.display().show_binormals);

        assert_eq!(scene.handle_key('?'), KeyOutcome::Ignored);
    }

    #[test]
    fn test_projection_uses_config() {
        let scene = scene();
        let p = scene.projection_matrix(2.0);
        // 90 degree fov: focal length 1, x halved by aspect
        assert!((p.rows[1][1] - 1.0).abs() < 0.0001);
        assert!((p.rows[0][0] - 0.5).abs() < 0.0001);
    }
}
