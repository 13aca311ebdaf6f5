//! Flat vertex arrays for the line draws, built from the sampled curve

use crate::curve::{SampledCurve, SplineSample};
use crate::math::Vec3;

/// Which frame vector a set of line segments shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameVector {
    Tangent,
    Normal,
    Binormal,
}

impl FrameVector {
    fn of(self, sample: &SplineSample) -> Vec3 {
        match self {
            FrameVector::Tangent => sample.tangent,
            FrameVector::Normal => sample.normal,
            FrameVector::Binormal => sample.binormal,
        }
    }
}

/// Sample positions in order, for a `LINE_STRIP`
pub fn curve_strip(curve: &SampledCurve) -> Vec<f32> {
    curve
        .samples()
        .iter()
        .flat_map(|s| s.position.xyz().to_array())
        .collect()
}

/// One `LINES` segment per sample, from the sample point to point + vector.
///
/// Samples whose vector is not finite (normals of straight stretches) are
/// left out rather than handed to the GPU as NaN.
pub fn frame_lines(curve: &SampledCurve, which: FrameVector) -> Vec<f32> {
    let mut data = Vec::with_capacity(curve.len() * 6);
    for sample in curve.samples() {
        let vector = which.of(sample);
        if !vector.is_finite() {
            continue;
        }
        let start = sample.position.xyz();
        data.extend_from_slice(&start.to_array());
        data.extend_from_slice(&(start + vector).to_array());
    }
    data
}

/// Vertex count of a flat `xyz` array
pub fn vertex_count(data: &[f32]) -> i32 {
    (data.len() / 3) as i32
}
