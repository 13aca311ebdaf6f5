//! Camera state, keyboard steering and the view transform

mod view;
mod controls;

pub use view::build_view_matrix;
pub use controls::{CameraCommand, CameraState};
