//! General multivector of the conformal algebra R(4,1)
//!
//! A multivector is a weighted sum of the 32 basis blades. Rotors, spheres
//! and points are all plain multivectors; "rotor" is a role, not a type.
//!
//! The geometric product is table-driven: the Cayley table in [`crate::basis`]
//! is computed at compile time, so each product term is one lookup and one
//! fused multiply-add. Outer and inner products reuse the same table with a
//! grade filter.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::basis::{BLADE_COUNT, BLADE_MASKS, BLADE_NAMES, GEOMETRIC, GRADES, REVERSE_SIGNS};

/// Element of the 32-dimensional graded algebra R(4,1).
///
/// Coefficients are indexed by canonical blade index 0..31 (see
/// [`crate::basis`] for the ordering). Indexing out of range is a
/// programming error and panics.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Multivector {
    c: [f32; BLADE_COUNT],
}

impl Default for Multivector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Multivector {
    /// The zero element.
    pub const ZERO: Self = Self {
        c: [0.0; BLADE_COUNT],
    };

    /// Build a multivector from its 32 raw coefficients.
    #[inline]
    pub const fn from_coefficients(c: [f32; BLADE_COUNT]) -> Self {
        Self { c }
    }

    /// A pure scalar.
    #[inline]
    pub const fn scalar(value: f32) -> Self {
        Self::basis(0, value)
    }

    /// A single basis blade scaled by `coefficient`.
    pub const fn basis(index: usize, coefficient: f32) -> Self {
        let mut c = [0.0; BLADE_COUNT];
        c[index] = coefficient;
        Self { c }
    }

    /// Raw coefficient array.
    #[inline]
    pub fn coefficients(&self) -> &[f32; BLADE_COUNT] {
        &self.c
    }

    /// The grade-0 coefficient.
    #[inline]
    pub fn scalar_part(&self) -> f32 {
        self.c[0]
    }

    /// Geometric product `self * rhs`.
    pub fn geometric_product(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..BLADE_COUNT {
            let a = self.c[i];
            if a == 0.0 {
                continue;
            }
            for j in 0..BLADE_COUNT {
                let b = rhs.c[j];
                if b == 0.0 {
                    continue;
                }
                let (target, sign) = GEOMETRIC[i][j];
                out.c[target as usize] += sign as f32 * a * b;
            }
        }
        out
    }

    /// Outer (wedge) product: keeps only terms where the operand blades share
    /// no basis vector, so the result grade is the sum of the operand grades.
    pub fn outer(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..BLADE_COUNT {
            let a = self.c[i];
            if a == 0.0 {
                continue;
            }
            for j in 0..BLADE_COUNT {
                let b = rhs.c[j];
                if b == 0.0 || BLADE_MASKS[i] & BLADE_MASKS[j] != 0 {
                    continue;
                }
                let (target, sign) = GEOMETRIC[i][j];
                out.c[target as usize] += sign as f32 * a * b;
            }
        }
        out
    }

    /// Inner (contraction) product: keeps only terms whose result grade is
    /// the absolute difference of the operand grades.
    pub fn inner(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..BLADE_COUNT {
            let a = self.c[i];
            if a == 0.0 {
                continue;
            }
            for j in 0..BLADE_COUNT {
                let b = rhs.c[j];
                if b == 0.0 {
                    continue;
                }
                let (target, sign) = GEOMETRIC[i][j];
                let diff = (GRADES[i] as i8 - GRADES[j] as i8).unsigned_abs();
                if GRADES[target as usize] != diff {
                    continue;
                }
                out.c[target as usize] += sign as f32 * a * b;
            }
        }
        out
    }

    /// Reversion: reverses the factor order of every blade, flipping the
    /// sign of grades 2 and 3.
    pub fn reverse(&self) -> Self {
        let mut out = *self;
        for i in 0..BLADE_COUNT {
            out.c[i] *= REVERSE_SIGNS[i] as f32;
        }
        out
    }

    /// Projection onto grade `k`: all other coefficients are zeroed.
    pub fn grade(&self, k: usize) -> Self {
        let mut out = Self::ZERO;
        for i in 0..BLADE_COUNT {
            if GRADES[i] as usize == k {
                out.c[i] = self.c[i];
            }
        }
        out
    }

    /// Squared magnitude under the reversion norm: the scalar part of
    /// `self * ~self`. Can be negative for mixed-grade elements.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.geometric_product(&self.reverse()).scalar_part()
    }

    /// Magnitude: `sqrt(|scalar part of self * ~self|)`.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().abs().sqrt()
    }

    /// Scale to unit magnitude. A zero element is returned unchanged;
    /// callers must not rely on normalizing a zero rotor.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            *self * (1.0 / mag)
        } else {
            *self
        }
    }
}

// Operator overloads. `*` is the geometric product, `^` the outer product,
// `|` the inner product and `!` reversion, matching the usual GA notation.

impl std::ops::Add for Multivector {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign for Multivector {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..BLADE_COUNT {
            self.c[i] += rhs.c[i];
        }
    }
}

impl std::ops::Sub for Multivector {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl std::ops::SubAssign for Multivector {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..BLADE_COUNT {
            self.c[i] -= rhs.c[i];
        }
    }
}

impl std::ops::Neg for Multivector {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl std::ops::Mul for Multivector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.geometric_product(&rhs)
    }
}

impl std::ops::Mul<f32> for Multivector {
    type Output = Self;
    fn mul(mut self, scalar: f32) -> Self {
        for i in 0..BLADE_COUNT {
            self.c[i] *= scalar;
        }
        self
    }
}

impl std::ops::Mul<Multivector> for f32 {
    type Output = Multivector;
    #[inline]
    fn mul(self, mv: Multivector) -> Multivector {
        mv * self
    }
}

impl std::ops::Div<f32> for Multivector {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        self * (1.0 / scalar)
    }
}

impl std::ops::BitXor for Multivector {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.outer(&rhs)
    }
}

impl std::ops::BitOr for Multivector {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.inner(&rhs)
    }
}

impl std::ops::Not for Multivector {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.reverse()
    }
}

impl std::ops::Index<usize> for Multivector {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.c[index]
    }
}

impl std::ops::IndexMut<usize> for Multivector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.c[index]
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for i in 0..BLADE_COUNT {
            if self.c[i] == 0.0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            if i == 0 {
                write!(f, "{}", self.c[i])?;
            } else {
                write!(f, "{}{}", self.c[i], BLADE_NAMES[i])?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::{E1, E12, E123, E2, E23, E45, E5};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: &Multivector, b: &Multivector) -> bool {
        (0..BLADE_COUNT).all(|i| (a[i] - b[i]).abs() < EPSILON)
    }

    fn sample_a() -> Multivector {
        Multivector::scalar(0.5) + E1 * 2.0 + E12 * -1.5 + E123 * 0.75 + E5 * 3.0
    }

    fn sample_b() -> Multivector {
        Multivector::scalar(-1.0) + E2 * 1.25 + E45 * 2.0 + E123 * -0.5
    }

    fn sample_c() -> Multivector {
        E1 * 1.5 + E12 * 0.25 + E5 * -2.0 + Multivector::basis(31, 1.0)
    }

    #[test]
    fn test_metric_squares() {
        assert!(approx_eq(&(E1 * E1), &Multivector::scalar(1.0)));
        assert!(approx_eq(&(E5 * E5), &Multivector::scalar(-1.0)));
        // e45 * e45 = -e4e4 e5e5 = +1
        assert!(approx_eq(&(E45 * E45), &Multivector::scalar(1.0)));
    }

    #[test]
    fn test_geometric_product_associativity() {
        let (a, b, c) = (sample_a(), sample_b(), sample_c());
        assert!(approx_eq(&((a * b) * c), &(a * (b * c))));
    }

    #[test]
    fn test_reversion_is_an_involution() {
        let a = sample_a();
        assert_eq!(a.reverse().reverse(), a);
    }

    #[test]
    fn test_reversion_flips_grades_two_and_three() {
        let a = sample_a();
        let r = a.reverse();
        assert_eq!(r[0], a[0]);
        assert_eq!(r[1], a[1]);
        assert_eq!(r[6], -a[6]);
        assert_eq!(r[16], -a[16]);
    }

    #[test]
    fn test_normalization_idempotence() {
        let a = sample_a();
        let n1 = a.normalized();
        let n2 = n1.normalized();
        assert!(approx_eq(&n1, &n2));
        assert!((n1.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalized_zero_is_degenerate_passthrough() {
        assert_eq!(Multivector::ZERO.normalized(), Multivector::ZERO);
    }

    #[test]
    fn test_outer_product_kills_repeated_factors() {
        assert_eq!(E1.outer(&E1), Multivector::ZERO);
        assert_eq!(E1.outer(&E2), E12);
        // The outer product of grade 1 and grade 2 sharing no factor is grade 3.
        let w = E1.outer(&E23);
        assert_eq!(w, E123);
    }

    #[test]
    fn test_inner_product_lowers_grade() {
        // e12 . e2 keeps only the grade-1 part.
        let r = E12.inner(&E2);
        assert_eq!(r.grade(1), r);
        assert!(approx_eq(&r, &E1));
    }

    #[test]
    fn test_grade_projection() {
        let a = sample_a();
        let g2 = a.grade(2);
        assert_eq!(g2[6], a[6]);
        assert_eq!(g2[0], 0.0);
        assert_eq!(g2[1], 0.0);
        assert_eq!(g2[16], 0.0);
    }

    #[test]
    fn test_indexer_roundtrip() {
        let mut a = Multivector::ZERO;
        a[17] = 4.25;
        assert_eq!(a[17], 4.25);
        assert_eq!(a.coefficients()[17], 4.25);
    }

    #[test]
    #[should_panic]
    fn test_indexer_out_of_range_panics() {
        let a = Multivector::ZERO;
        let _ = a[32];
    }

    #[test]
    fn test_display() {
        let a = Multivector::scalar(2.0) + E12 * -1.0;
        assert_eq!(format!("{}", a), "2 + -1e12");
        assert_eq!(format!("{}", Multivector::ZERO), "0");
    }
}
