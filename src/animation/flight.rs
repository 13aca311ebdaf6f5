//! Object flight along the sampled curve
//!
//! The flight position is a continuous index into the curve's samples.
//! It moves forward at a fixed number of samples per second and stops for
//! good once the next step would reach the final sample.

use crate::curve::SampledCurve;
use crate::math::{Vec3, Vec4};

/// Where the object should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPose {
    /// Translation to apply to the mesh: curve point minus mesh center, `w = 0`
    pub offset: Vec4,
    /// Unit direction the object should face
    pub heading: Vec3,
}

/// Flight animation state
#[derive(Debug, Clone)]
pub struct FlightAnimation {
    /// Continuous sample index
    position: f32,
    /// Samples per second
    speed: f32,
    /// Index of the final sample
    last_index: usize,
    done: bool,
}

impl FlightAnimation {
    pub fn new(speed: f32, last_index: usize) -> Self {
        Self {
            position: 0.0,
            speed,
            last_index,
            done: false,
        }
    }

    /// Animation sized for a sampled curve
    pub fn for_curve(curve: &SampledCurve, speed: f32) -> Self {
        Self::new(speed, curve.last_index())
    }

    /// Advance by `delta_ms` milliseconds.
    ///
    /// A step whose whole part would reach the last sample finishes the
    /// flight instead of moving, so the object never passes the end.
    pub fn advance(&mut self, delta_ms: f32) {
        if self.done {
            return;
        }

        let next = self.position + delta_ms.max(0.0) / 1000.0 * self.speed;
        if next.floor() as usize >= self.last_index {
            self.done = true;
            log::info!("flight finished at sample {:.2}", self.position);
            return;
        }
        self.position = next;
    }

    /// Interpolated pose between the two samples around the current position
    pub fn pose(&self, curve: &SampledCurve, object_center: Vec4) -> ObjectPose {
        let samples = curve.samples();
        let floor = (self.position.floor() as usize).min(samples.len().saturating_sub(1));
        let ceil = (floor + 1).min(samples.len().saturating_sub(1));
        let frac = self.position - floor as f32;

        let (a, b) = (&samples[floor], &samples[ceil]);
        let position = a.position.lerp(&b.position, frac);
        let tangent = a.tangent.lerp(&b.tangent, frac);

        ObjectPose {
            offset: (position - object_center).with_w(0.0),
            heading: tangent.normalize(),
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Back to the start of the curve
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.done = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::UniformBSpline;

    /// Five points along +x: two segments, ten samples
    fn straight_curve() -> SampledCurve {
        let spline = UniformBSpline::new(
            (0..5).map(|x| Vec4::new(x as f32, 0.0, 0.0, 1.0)).collect(),
        );
        SampledCurve::build(&spline, 5)
    }

    #[test]
    fn test_advance_one_second() {
        let curve = straight_curve();
        assert_eq!(curve.len(), 10);

        let mut anim = FlightAnimation::for_curve(&curve, 5.0);
        anim.advance(1000.0);
        assert_eq!(anim.position(), 5.0);
        assert!(!anim.is_done());
    }

    #[test]
    fn test_stops_before_last_sample() {
        let mut anim = FlightAnimation::new(4.0, 9);
        anim.advance(2000.0);
        assert_eq!(anim.position(), 8.0);

        anim.advance(250.0); // 9.0 reaches the last sample
        assert!(anim.is_done());
        assert_eq!(anim.position(), 8.0);
    }

    #[test]
    fn test_large_step_does_not_overshoot() {
        let mut anim = FlightAnimation::new(5.0, 9);
        anim.advance(5000.0);
        assert!(anim.is_done());
        assert_eq!(anim.position(), 0.0);
    }

    #[test]
    fn test_done_is_permanent() {
        let mut anim = FlightAnimation::new(5.0, 9);
        anim.advance(10_000.0);
        assert!(anim.is_done());
        for _ in 0..5 {
            anim.advance(1.0);
            assert!(anim.is_done());
            assert_eq!(anim.position(), 0.0);
        }
    }

    #[test]
    fn test_position_never_decreases() {
        let mut anim = FlightAnimation::new(5.0, 40);
        let mut prev = anim.position();
        for delta in [16.0, 33.0, -50.0, 0.0, 120.0, 7.5, -1.0, 250.0] {
            anim.advance(delta);
            assert!(anim.position() >= prev);
            prev = anim.position();
        }
    }

    #[test]
    fn test_pose_interpolates_samples() {
        let curve = straight_curve();
        let mut anim = FlightAnimation::for_curve(&curve, 5.0);
        anim.advance(500.0); // position 2.5: halfway between x = 1.4 and x = 1.6

        let center = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let pose = anim.pose(&curve, center);
        assert!((pose.offset.x - 0.5).abs() < 0.0001);
        assert_eq!(pose.offset.y, 0.0);
        assert_eq!(pose.offset.w, 0.0);
        assert!((pose.heading - Vec3::RIGHT).length() < 0.0001);
    }

    #[test]
    fn test_pose_at_start() {
        let curve = straight_curve();
        let anim = FlightAnimation::for_curve(&curve, 5.0);
        let pose = anim.pose(&curve, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert!((pose.offset.x - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_reset() {
        let mut anim = FlightAnimation::new(5.0, 9);
        anim.advance(10_000.0);
        anim.reset();
        assert!(!anim.is_done());
        assert_eq!(anim.position(), 0.0);
    }
}
