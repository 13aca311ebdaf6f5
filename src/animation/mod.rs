//! Animation of the object along the curve
//!
//! `FlightAnimation` moves a continuous sample index forward in time and
//! interpolates the object's pose; `Facing` turns that pose's heading into
//! a rotation.

mod flight;
mod facing;

pub use flight::{FlightAnimation, ObjectPose};
pub use facing::Facing;
