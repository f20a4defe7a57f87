//! Rotor construction from engine-native pose data
//!
//! Translation, rotation and dilation each become a versor of R(4,1); a
//! full similarity transform is their geometric product `T * R * D`,
//! normalized. The composition order is fixed and defines the pose-to-rotor
//! convention the extraction side depends on.

use cgalerp_math::basis::{E123, E45, E_INF, E_ORIGIN};
use cgalerp_math::{Multivector, Quat, Vec3};

/// Spatial rotation rotor equivalent to the unit quaternion `q`.
///
/// The quaternion's vector part is placed into grade 1, mapped onto the
/// e123 even subalgebra by trivector multiplication, negated, and the
/// scalar part inserted: the standard isomorphism between unit quaternions
/// and rotation rotors.
pub fn rotation_rotor(q: Quat) -> Multivector {
    let mut v = Multivector::ZERO;
    v[1] = q.x;
    v[2] = q.y;
    v[3] = q.z;
    let mut r = -(E123 * v);
    r[0] = q.w;
    r
}

/// Translation rotor `1 - 0.5 * (x*e1 + y*e2 + z*e3) * e_inf`.
pub fn translator(v: Vec3) -> Multivector {
    let mut direction = Multivector::ZERO;
    direction[1] = v.x;
    direction[2] = v.y;
    direction[3] = v.z;
    Multivector::scalar(1.0) - (direction * E_INF) * 0.5
}

/// Dilation rotor `1 + t*e45` with `t = (1 - scale) / (1 + scale)`.
///
/// A scale of exactly -1 is a caller bug (division by zero) and panics.
pub fn dilator(scale: f32) -> Multivector {
    assert!(scale != -1.0, "dilation is undefined for scale -1");
    let t = (1.0 - scale) / (1.0 + scale);
    Multivector::scalar(1.0) + E45 * t
}

/// Closed-form inverse of [`dilator`], computed directly from the scale
/// factor and the `e_inf ^ e_origin` bivector.
///
/// Used to strip a measured dilation back out of a combined rotor. A scale
/// of exactly 0 is a caller bug (division by zero) and panics.
pub fn inverse_dilator(scale: f32) -> Multivector {
    assert!(scale != 0.0, "inverse dilation is undefined for scale 0");
    let plane = E_INF ^ E_ORIGIN;
    let numerator =
        Multivector::scalar((1.0 + scale) * (1.0 + scale)) + plane * (scale * scale - 1.0);
    numerator * (1.0 / (4.0 * scale))
}

/// Combined translation-rotation-dilation rotor `T * R * D`, normalized.
pub fn combine_trd(rotation: Quat, position: Vec3, scale: f32) -> Multivector {
    let product = translator(position) * rotation_rotor(rotation) * dilator(scale);
    product.normalized()
}

/// Rigid-motion rotor `T * R` without dilation, normalized.
pub fn combine_tr(rotation: Quat, position: Vec3) -> Multivector {
    let product = translator(position) * rotation_rotor(rotation);
    product.normalized()
}
