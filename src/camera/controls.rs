use crate::data::CameraConfig;
use crate::math::{Mat4, Vec3};
use super::view::build_view_matrix;

/// One keyboard step of camera movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    MoveForward,
    MoveBack,
    StrafeRight,
    StrafeLeft,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

impl CameraCommand {
    /// `w a s d` move, `i j k l` turn, `q e` roll
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::MoveForward),
            's' => Some(Self::MoveBack),
            'd' => Some(Self::StrafeRight),
            'a' => Some(Self::StrafeLeft),
            'i' => Some(Self::PitchUp),
            'k' => Some(Self::PitchDown),
            'j' => Some(Self::YawLeft),
            'l' => Some(Self::YawRight),
            'q' => Some(Self::RollLeft),
            'e' => Some(Self::RollRight),
            _ => None,
        }
    }
}

/// Eye, look-at target and up vector, changed only through [`CameraState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    movement_speed: f32,
    rotation_speed: f32,
}

impl CameraState {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            eye: config.eye,
            target: config.target,
            up: config.up,
            movement_speed: config.movement_speed,
            rotation_speed: config.rotation_speed,
        }
    }

    /// Apply one key step.
    ///
    /// Every step first re-orthogonalizes `up` against the line of sight.
    /// Moves shift eye and target together; turns swing the target around
    /// the eye, keeping its distance.
    pub fn apply(&mut self, command: CameraCommand) {
        let sight = self.target - self.eye;
        let right = sight.cross(&self.up).normalize();
        let up = right.cross(&sight).normalize();
        self.up = up;

        let step = self.movement_speed;
        let turn = self.rotation_speed;
        let mut delta = Vec3::ZERO;

        match command {
            CameraCommand::MoveForward => delta = sight.normalize().scale(step),
            CameraCommand::MoveBack => delta = sight.normalize().scale(-step),
            CameraCommand::StrafeRight => delta = right.scale(step),
            CameraCommand::StrafeLeft => delta = right.scale(-step),
            CameraCommand::PitchUp => self.target = self.eye + sight.rotate_about(&right, turn),
            CameraCommand::PitchDown => self.target = self.eye + sight.rotate_about(&right, -turn),
            CameraCommand::YawLeft => self.target = self.eye + sight.rotate_about(&up, turn),
            CameraCommand::YawRight => self.target = self.eye + sight.rotate_about(&up, -turn),
            CameraCommand::RollLeft => self.up = up.rotate_about(&sight, -turn),
            CameraCommand::RollRight => self.up = up.rotate_about(&sight, turn),
        }

        self.eye = self.eye + delta;
        self.target = self.target + delta;
    }

    pub fn view_matrix(&self) -> Mat4 {
        build_view_matrix(self.eye, self.target, self.up)
    }
}
