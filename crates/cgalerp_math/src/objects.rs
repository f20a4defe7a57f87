//! Round objects of the conformal model
//!
//! A sphere with center `c` and radius `r` embeds into R(4,1) as
//! `c1*e1 + c2*e2 + c3*e3 + 0.5*(c.c - r^2)*e_inf + e_origin`. A conformal
//! point is the zero-radius case. The embedding is homogeneous: a versor
//! sandwich may scale the whole element, which shows up in the e4/e5
//! coefficients and has to be divided out before reading center and radius.

use crate::basis::{E_INF, E_ORIGIN};
use crate::{Multivector, Vec3};

/// Conformal sphere with the given center and radius.
pub fn sphere(center: Vec3, radius: f32) -> Multivector {
    let mut s = Multivector::ZERO;
    s[1] = center.x;
    s[2] = center.y;
    s[3] = center.z;
    let weight = 0.5 * (center.dot(center) - radius * radius);
    s + E_INF * weight + E_ORIGIN
}

/// Conformal point: a sphere of radius zero.
#[inline]
pub fn point(position: Vec3) -> Multivector {
    sphere(position, 0.0)
}

/// Read center and radius back out of a weight-normalized sphere.
///
/// Returns `None` when the radicand is negative, which means the element is
/// not a real sphere (e.g. it came from a malformed rotor sandwich).
pub fn sphere_data(s: &Multivector) -> Option<(Vec3, f32)> {
    let center = Vec3::new(s[1], s[2], s[3]);
    let radicand = center.dot(center) - 2.0 * (s[4] + 0.5);
    if radicand < 0.0 {
        return None;
    }
    Some((center, radicand.sqrt()))
}
