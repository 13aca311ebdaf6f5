use serde::Deserialize;
use crate::math::Vec3;
use super::error::{LoadError, LoadResult};

/// Tunable constants of the scene, read from YAML.
/// Every key is optional and falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Samples taken per curve segment
    pub samples_per_segment: usize,
    /// Curve samples the object passes per second
    pub object_speed: f32,
    /// Direction the mesh faces in its own coordinates
    pub object_forward: Vec3,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Distance moved per key press
    pub movement_speed: f32,
    /// Radians turned per key press
    pub rotation_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_normals: bool,
    pub show_binormals: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            samples_per_segment: 5,
            object_speed: 5.0,
            object_forward: Vec3::FORWARD,
            camera: CameraConfig::default(),
            projection: ProjectionConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(5.0, 5.0, 0.0),
            target: Vec3::new(5.0, 5.0, 1.0),
            up: Vec3::UP,
            movement_speed: 0.3,
            rotation_speed: 0.02,
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> LoadResult<Self> {
        // An empty document deserializes to unit, not an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SceneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the scene cannot run with
    pub(crate) fn validate(&self) -> LoadResult<()> {
        if self.samples_per_segment == 0 {
            return Err(LoadError::InvalidConfig(
                "samples_per_segment must be at least 1".to_string(),
            ));
        }
        if !(self.object_speed.is_finite() && self.object_speed >= 0.0) {
            return Err(LoadError::InvalidConfig(format!(
                "object_speed must be a non-negative number, got {}",
                self.object_speed
            )));
        }
        let p = &self.projection;
        if !(p.near > 0.0 && p.far > p.near && p.far.is_finite()) {
            return Err(LoadError::InvalidConfig(format!(
                "projection needs 0 < near < far, got near {} far {}",
                p.near, p.far
            )));
        }
        if !(p.fov_degrees > 0.0 && p.fov_degrees < 180.0) {
            return Err(LoadError::InvalidConfig(format!(
                "projection fov_degrees must lie in (0, 180), got {}",
                p.fov_degrees
            )));
        }
        Ok(())
    }
}
