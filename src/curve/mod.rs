//! Curve sampling: the spline evaluated once per sub-sample, with a
//! tangent/normal/binormal frame at every sample.

mod sampler;

pub use sampler::{SampledCurve, SplineSample};
