use crate::math::{UniformBSpline, Vec3, Vec4};

/// One precomputed point on the curve with its moving frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    /// Homogeneous position, `w = 1`
    pub position: Vec4,
    pub tangent: Vec3,
    pub second_derivative: Vec3,
    /// `normalize(tangent x second_derivative)`
    pub normal: Vec3,
    /// `normalize(tangent x normal)`
    pub binormal: Vec3,
}

/// Every segment of a spline sampled at a fixed number of parameter values.
///
/// Sample `segment * samples_per_segment + k` is taken at
/// `t = k / samples_per_segment`. Built once and never modified.
#[derive(Debug, Clone)]
pub struct SampledCurve {
    samples: Vec<SplineSample>,
    samples_per_segment: usize,
}

impl SampledCurve {
    /// Evaluate the spline and build the frame of every sample.
    ///
    /// Cross products are taken on the raw evaluator output before any
    /// normalization. Where tangent and second derivative are parallel
    /// (a straight stretch of curve) the normal and binormal come out NaN.
    pub fn build(spline: &UniformBSpline, samples_per_segment: usize) -> Self {
        let mut samples = Vec::with_capacity(spline.segment_count() * samples_per_segment);

        for segment in 0..spline.segment_count() {
            for k in 0..samples_per_segment {
                let t = k as f32 / samples_per_segment as f32;
                let point = spline.evaluate(segment, t);
                let normal = point.tangent.cross(&point.second_derivative).normalize();

                samples.push(SplineSample {
                    position: Vec4::point(point.position),
                    tangent: point.tangent.normalize(),
                    second_derivative: point.second_derivative.normalize(),
                    normal,
                    binormal: point.tangent.cross(&normal).normalize(),
                });
            }
        }

        Self {
            samples,
            samples_per_segment,
        }
    }

    pub fn samples(&self) -> &[SplineSample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&SplineSample> {
        self.samples.get(index)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    pub fn segment_count(&self) -> usize {
        if self.samples_per_segment == 0 {
            0
        } else {
            self.samples.len() / self.samples_per_segment
        }
    }

    /// Flat index of sub-sample `k` of `segment`
    pub fn index_of(&self, segment: usize, k: usize) -> usize {
        segment * self.samples_per_segment + k
    }

    /// Index of the final sample, where the flight stops
    pub fn last_index(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helix(points: usize) -> UniformBSpline {
        UniformBSpline::new(
            (0..points)
                .map(|k| {
                    let a = k as f32 * 0.8;
                    Vec4::new(3.0 * a.cos(), k as f32 * 0.5, 3.0 * a.sin(), 1.0)
                })
                .collect(),
        )
    }

    #[test]
    fn test_sample_count_and_layout() {
        let spline = helix(8);
        let curve = SampledCurve::build(&spline, 5);
        assert_eq!(curve.len(), (8 - 3) * 5);
        assert_eq!(curve.segment_count(), 5);
        assert_eq!(curve.last_index(), 24);

        let idx = curve.index_of(2, 3);
        assert_eq!(idx, 13);
        let expected = spline.evaluate(2, 0.6).position;
        let sample = curve.get(idx).unwrap();
        assert!((sample.position.xyz() - expected).length() < 0.0001);
        assert_eq!(sample.position.w, 1.0);
    }

    #[test]
    fn test_frames_are_orthonormal() {
        let curve = SampledCurve::build(&helix(9), 5);
        for (i, s) in curve.samples().iter().enumerate() {
            assert!((s.tangent.length() - 1.0).abs() < 0.0001, "sample {}", i);
            assert!((s.normal.length() - 1.0).abs() < 0.0001, "sample {}", i);
            assert!((s.binormal.length() - 1.0).abs() < 0.0001, "sample {}", i);
            assert!((s.second_derivative.length() - 1.0).abs() < 0.0001, "sample {}", i);
            assert!(s.tangent.dot(&s.normal).abs() < 0.0001, "sample {}", i);
            assert!(s.tangent.dot(&s.binormal).abs() < 0.0001, "sample {}", i);
            assert!(s.normal.dot(&s.binormal).abs() < 0.0001, "sample {}", i);
        }
    }

    #[test]
    fn test_normal_uses_raw_vectors() {
        let spline = helix(6);
        let curve = SampledCurve::build(&spline, 4);
        let raw = spline.evaluate(1, 0.25);
        let s = curve.get(curve.index_of(1, 1)).unwrap();
        let expected = raw.tangent.cross(&raw.second_derivative).normalize();
        assert!((s.normal - expected).length() < 0.0001);
    }

    #[test]
    fn test_straight_curve() {
        let spline = UniformBSpline::new(
            (0..5).map(|x| Vec4::new(x as f32, 0.0, 0.0, 1.0)).collect(),
        );
        let curve = SampledCurve::build(&spline, 5);
        assert_eq!(curve.len(), 10);
        for s in curve.samples() {
            assert_eq!(s.position.y, 0.0);
            assert_eq!(s.position.z, 0.0);
            assert!((s.tangent - Vec3::RIGHT).length() < 0.0001);
            // No curvature: the normal is undefined
            assert!(!s.normal.is_finite());
        }
    }
}
