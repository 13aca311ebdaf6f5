pub mod vec3;
pub mod vec4;
pub mod matrix;
pub mod bspline;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use matrix::Mat4;
pub use bspline::{UniformBSpline, SegmentPoint};
