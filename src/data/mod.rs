pub mod error;
pub mod config;
pub mod control_points;
pub mod obj;

pub use error::{LoadError, LoadResult};
pub use config::{SceneConfig, CameraConfig, ProjectionConfig, DisplayConfig};
pub use control_points::parse_control_points;
pub use obj::parse_obj;
