//! Rotor interpolation
//!
//! Two rigid TR rotors are blended component-wise over the fixed 15-slot
//! subset a TR rotor can occupy (grades 0, 1, 2 and the e1234/e1235 pair);
//! every other slot is forced to zero. This is an affine blend of rotor
//! coordinates, not a geodesic on the rotor manifold: cheap, and accurate
//! for the small per-frame deltas it is meant for. An optional
//! renormalization path is available for larger start/end separations.
//!
//! Scale is blended linearly and independently of the rotor blend.

use cgalerp_math::Multivector;

use crate::error::DecomposeError;
use crate::extract::{split_trd, tr_components};
use crate::pose::Pose;
use crate::rotor::combine_trd;

/// The coefficient slots that participate in a TR rotor blend.
pub const TR_BLEND_SLOTS: [usize; 15] = [0, 1, 2, 3, 6, 7, 8, 9, 10, 11, 12, 13, 14, 26, 27];

/// Affine blend of two TR rotors by `factor`, restricted to
/// [`TR_BLEND_SLOTS`]; all other slots are zero.
pub fn lerp_tr(start: &Multivector, end: &Multivector, factor: f32) -> Multivector {
    let mut out = Multivector::ZERO;
    for &i in &TR_BLEND_SLOTS {
        out[i] = start[i] * (1.0 - factor) + end[i] * factor;
    }
    out
}

/// Evaluate the blended pose at `factor` from precomputed TR rotors and
/// endpoint scales. `factor` is clamped to [0, 1].
pub fn evaluate(
    tr_start: &Multivector,
    tr_end: &Multivector,
    scale_start: f32,
    scale_end: f32,
    factor: f32,
) -> Pose {
    evaluate_with(tr_start, tr_end, scale_start, scale_end, factor, false)
}

fn evaluate_with(
    tr_start: &Multivector,
    tr_end: &Multivector,
    scale_start: f32,
    scale_end: f32,
    factor: f32,
    renormalize: bool,
) -> Pose {
    let factor = factor.clamp(0.0, 1.0);
    let mut blended = lerp_tr(tr_start, tr_end, factor);
    if renormalize {
        blended = blended.normalized();
    }
    let (position, rotation) = tr_components(&blended);
    let scale = scale_end * factor + scale_start * (1.0 - factor);
    Pose {
        position,
        rotation,
        scale,
    }
}

/// Precomputed interpolation between two poses.
///
/// Built once when an interpolation begins; [`TrdLerp::evaluate`] is then
/// called every tick with the current factor.
#[derive(Clone, Copy, Debug)]
pub struct TrdLerp {
    tr_start: Multivector,
    tr_end: Multivector,
    scale_start: f32,
    scale_end: f32,
    renormalize: bool,
}

impl TrdLerp {
    /// Convert both poses to combined TRD rotors and split each into a
    /// rigid TR rotor plus scale factor.
    pub fn precompute(start: &Pose, end: &Pose) -> Result<Self, DecomposeError> {
        let (tr_start, scale_start) =
            split_trd(&combine_trd(start.rotation, start.position, start.scale))?;
        let (tr_end, scale_end) = split_trd(&combine_trd(end.rotation, end.position, end.scale))?;
        log::debug!(
            "precomputed blend rotors, scales {} -> {}",
            scale_start,
            scale_end
        );
        Ok(Self {
            tr_start,
            tr_end,
            scale_start,
            scale_end,
            renormalize: false,
        })
    }

    /// Renormalize the blended rotor before decomposing it. Off by
    /// default, which matches the plain affine blend; turning it on keeps
    /// the blend on the rotor manifold for larger start/end separations.
    pub fn with_renormalization(mut self, renormalize: bool) -> Self {
        self.renormalize = renormalize;
        self
    }

    /// Blended pose at `factor` (clamped to [0, 1]).
    pub fn evaluate(&self, factor: f32) -> Pose {
        evaluate_with(
            &self.tr_start,
            &self.tr_end,
            self.scale_start,
            self.scale_end,
            factor,
            self.renormalize,
        )
    }

    /// The precomputed rigid rotors for start and end.
    pub fn endpoints(&self) -> (&Multivector, &Multivector) {
        (&self.tr_start, &self.tr_end)
    }

    /// The extracted scale factors for start and end.
    pub fn scales(&self) -> (f32, f32) {
        (self.scale_start, self.scale_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotor::combine_tr;
    use cgalerp_math::basis::BLADE_COUNT;
    use cgalerp_math::{Quat, Vec3};
    use std::f32::consts::PI;

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_lerp_boundaries() {
        let a = combine_tr(Quat::from_axis_angle(Vec3::Z, 0.7), Vec3::new(1.0, 2.0, 3.0));
        let b = combine_tr(Quat::from_axis_angle(Vec3::X, -0.4), Vec3::new(-2.0, 0.0, 5.0));

        let at_start = lerp_tr(&a, &b, 0.0);
        let at_end = lerp_tr(&a, &b, 1.0);
        for i in 0..BLADE_COUNT {
            if TR_BLEND_SLOTS.contains(&i) {
                assert_eq!(at_start[i], a[i]);
                assert_eq!(at_end[i], b[i]);
            } else {
                assert_eq!(at_start[i], 0.0);
                assert_eq!(at_end[i], 0.0);
            }
        }
    }

    #[test]
    fn test_translation_and_scale_scenario() {
        // Identity to position (10,0,0) with scale 1 -> 2: the halfway pose
        // sits near (5,0,0) with identity rotation and scale 1.5. The rigid
        // rotors keep the magnitudes the dilation split leaves on them, so
        // the affine blend overshoots the midpoint by a few percent.
        let start = Pose::identity();
        let end = Pose::new(Vec3::new(10.0, 0.0, 0.0), Quat::IDENTITY, 2.0);

        let lerp = TrdLerp::precompute(&start, &end).unwrap();
        let mid = lerp.evaluate(0.5);

        assert!((mid.position.x - 5.0).abs() < 0.2, "got {:?}", mid.position);
        assert!(mid.position.y.abs() < EPSILON);
        assert!(mid.position.z.abs() < EPSILON);
        assert!((mid.rotation.w - 1.0).abs() < EPSILON);
        assert!((mid.scale - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_evaluate_clamps_factor() {
        let start = Pose::identity();
        let end = Pose::new(Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY, 1.0);
        let lerp = TrdLerp::precompute(&start, &end).unwrap();

        let below = lerp.evaluate(-0.5);
        let above = lerp.evaluate(1.5);
        assert!((below.position.x - 0.0).abs() < EPSILON);
        assert!((above.position.x - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_scale_blend_is_independent_and_linear() {
        let start = Pose::new(Vec3::ZERO, Quat::IDENTITY, 0.5);
        let end = Pose::new(Vec3::ZERO, Quat::IDENTITY, 2.5);
        let lerp = TrdLerp::precompute(&start, &end).unwrap();
        assert!((lerp.evaluate(0.25).scale - 1.0).abs() < EPSILON);
        assert!((lerp.evaluate(0.75).scale - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_renormalized_blend_recovers_endpoints() {
        let start = Pose::new(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_axis_angle(Vec3::Y, PI / 3.0),
            1.0,
        );
        let end = Pose::new(
            Vec3::new(0.0, 2.0, 0.0),
            Quat::from_axis_angle(Vec3::Y, -PI / 3.0),
            2.0,
        );
        let lerp = TrdLerp::precompute(&start, &end)
            .unwrap()
            .with_renormalization(true);

        let p0 = lerp.evaluate(0.0);
        let p1 = lerp.evaluate(1.0);
        assert!((p0.position.x - 1.0).abs() < EPSILON, "got {:?}", p0.position);
        assert!((p1.position.y - 2.0).abs() < EPSILON, "got {:?}", p1.position);
    }
}
