//! Pose extraction: decomposing a combined rotor back into pose data
//!
//! The scale carried by a TRD rotor is measured geometrically: conjugating
//! the canonical unit sphere by the rotor yields a sphere whose radius is
//! the accumulated scale factor. Multiplying by the closed-form inverse
//! dilation then leaves the pure rigid TR rotor, which splits further into
//! a quaternion and a translation vector.

use cgalerp_math::objects::{sphere, sphere_data};
use cgalerp_math::{Multivector, Quat, Vec3};
use cgalerp_math::basis::{E123, E_ORIGIN};

use crate::error::DecomposeError;

/// The coefficient slots that can carry rotation terms: grade 0 plus the
/// e123-subspace blades. The grade-1 and e123 slots are always zero for a
/// well-formed rotation rotor but are masked in for fidelity with the
/// construction side.
pub const ROTATION_SLOTS: [usize; 8] = [0, 1, 2, 3, 6, 7, 10, 16];

/// Split a combined TRD rotor into its rigid TR rotor and scale factor.
///
/// Conjugates the canonical unit sphere, renormalizes the homogeneous
/// weight (the `e5 - e4` coefficient difference must be 1 before center and
/// radius can be read off), measures the radius, and strips the dilation.
pub fn split_trd(m: &Multivector) -> Result<(Multivector, f32), DecomposeError> {
    let unit = sphere(Vec3::ZERO, 1.0);
    let mut image = *m * unit * m.reverse();

    let weight = image[5] - image[4];
    if weight == 0.0 {
        return Err(DecomposeError::ZeroWeight);
    }
    if weight != 1.0 {
        image = image * (1.0 / weight);
    }

    let (_center, radius) = sphere_data(&image).ok_or(DecomposeError::ImaginaryRadius)?;
    if radius == 0.0 {
        return Err(DecomposeError::ZeroRadius);
    }

    Ok((*m * crate::rotor::inverse_dilator(radius), radius))
}

/// Copy of the rotor restricted to [`ROTATION_SLOTS`]; everything else zero.
pub fn rotation_part(tr: &Multivector) -> Multivector {
    let mut r = Multivector::ZERO;
    for &i in &ROTATION_SLOTS {
        r[i] = tr[i];
    }
    r
}

/// Recover the quaternion of a rotation rotor.
///
/// The scalar part maps straight across; the vector part comes from the
/// grade-1 coefficients of `e123 * R` (the inverse of the construction in
/// [`crate::rotor::rotation_rotor`]). The result is normalized so callers
/// always see a unit quaternion even when the rotor carries a magnitude
/// artifact from the affine blend.
pub fn rotor_to_quat(r: &Multivector) -> Quat {
    let mapped = E123 * *r;
    Quat::new(mapped[1], mapped[2], mapped[3], r[0]).normalized()
}

/// Recover the translation vector of a pure translation rotor from
/// `-2 * (T | -e_origin)`.
pub fn translator_to_vector(t: &Multivector) -> Vec3 {
    let t = t.normalized();
    let projected = (t | -E_ORIGIN) * -2.0;
    Vec3::new(projected[1], projected[2], projected[3])
}

/// Decompose a rigid TR rotor into its translation vector and quaternion.
pub fn tr_components(tr: &Multivector) -> (Vec3, Quat) {
    let r = rotation_part(tr);
    let rotation = rotor_to_quat(&r);
    let t_only = (*tr * r.reverse()).normalized();
    let position = translator_to_vector(&t_only);
    (position, rotation)
}
