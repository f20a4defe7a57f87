//! Basis blades of the conformal algebra R(4,1)
//!
//! The 32 basis blades are numbered in grade-lexicographic order:
//!
//! - index 0: scalar
//! - indices 1-5: e1..e5
//! - indices 6-15: e12, e13, e14, e15, e23, e24, e25, e34, e35, e45
//! - indices 16-25: e123, e124, e125, e134, e135, e145, e234, e235, e245, e345
//! - indices 26-30: e1234, e1235, e1245, e1345, e2345
//! - index 31: e12345
//!
//! e1..e4 square to +1, e5 squares to -1, and all distinct basis vectors
//! anticommute. The geometric-product Cayley table is built at compile time,
//! so there is no runtime registry to initialize.

use crate::Multivector;

/// Number of basis blades (2^5).
pub const BLADE_COUNT: usize = 32;

/// Printable name of each blade, in canonical index order.
pub const BLADE_NAMES: [&str; BLADE_COUNT] = [
    "1", "e1", "e2", "e3", "e4", "e5", "e12", "e13", "e14", "e15", "e23", "e24", "e25", "e34",
    "e35", "e45", "e123", "e124", "e125", "e134", "e135", "e145", "e234", "e235", "e245", "e345",
    "e1234", "e1235", "e1245", "e1345", "e2345", "e12345",
];

/// Bitmask of each blade: bit n set means basis vector e(n+1) is a factor.
pub(crate) const BLADE_MASKS: [u32; BLADE_COUNT] = [
    0b00000, // 1
    0b00001, 0b00010, 0b00100, 0b01000, 0b10000, // e1..e5
    0b00011, 0b00101, 0b01001, 0b10001, 0b00110, // e12, e13, e14, e15, e23
    0b01010, 0b10010, 0b01100, 0b10100, 0b11000, // e24, e25, e34, e35, e45
    0b00111, 0b01011, 0b10011, 0b01101, 0b10101, // e123, e124, e125, e134, e135
    0b11001, 0b01110, 0b10110, 0b11010, 0b11100, // e145, e234, e235, e245, e345
    0b01111, 0b10111, 0b11011, 0b11101, 0b11110, // e1234, e1235, e1245, e1345, e2345
    0b11111, // e12345
];

const E5_BIT: u32 = 0b10000;

const fn build_mask_to_index() -> [u8; BLADE_COUNT] {
    let mut table = [0u8; BLADE_COUNT];
    let mut i = 0;
    while i < BLADE_COUNT {
        table[BLADE_MASKS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Inverse of [`BLADE_MASKS`]: canonical index of each bitmask.
pub(crate) const MASK_TO_INDEX: [u8; BLADE_COUNT] = build_mask_to_index();

const fn build_grades() -> [u8; BLADE_COUNT] {
    let mut table = [0u8; BLADE_COUNT];
    let mut i = 0;
    while i < BLADE_COUNT {
        table[i] = BLADE_MASKS[i].count_ones() as u8;
        i += 1;
    }
    table
}

/// Grade (number of basis-vector factors) of each blade.
pub(crate) const GRADES: [u8; BLADE_COUNT] = build_grades();

/// Sign of the product of two blades given as bitmasks.
///
/// Counts the transpositions needed to sort the merged factor sequence into
/// canonical order, then folds in the metric square of every cancelling
/// factor (-1 for e5, +1 for e1..e4).
const fn product_sign(a: u32, b: u32) -> i8 {
    let mut swaps = 0u32;
    let mut rest = a >> 1;
    while rest != 0 {
        swaps += (rest & b).count_ones();
        rest >>= 1;
    }
    let mut sign: i8 = if swaps % 2 == 0 { 1 } else { -1 };
    if a & b & E5_BIT != 0 {
        sign = -sign;
    }
    sign
}

const fn build_geometric_table() -> [[(u8, i8); BLADE_COUNT]; BLADE_COUNT] {
    let mut table = [[(0u8, 0i8); BLADE_COUNT]; BLADE_COUNT];
    let mut i = 0;
    while i < BLADE_COUNT {
        let mut j = 0;
        while j < BLADE_COUNT {
            let a = BLADE_MASKS[i];
            let b = BLADE_MASKS[j];
            table[i][j] = (MASK_TO_INDEX[(a ^ b) as usize], product_sign(a, b));
            j += 1;
        }
        i += 1;
    }
    table
}

/// Cayley table of the geometric product: `GEOMETRIC[i][j]` is the target
/// blade index and sign of `blade(i) * blade(j)`.
pub(crate) const GEOMETRIC: [[(u8, i8); BLADE_COUNT]; BLADE_COUNT] = build_geometric_table();

const fn build_reverse_signs() -> [i8; BLADE_COUNT] {
    let mut table = [1i8; BLADE_COUNT];
    let mut i = 0;
    while i < BLADE_COUNT {
        let k = GRADES[i] as u32;
        // Reversion flips blades whose grade satisfies k(k-1)/2 odd.
        // Written as (k^2 - k)/2 to stay in range at k = 0.
        if (k * k - k) / 2 % 2 == 1 {
            table[i] = -1;
        }
        i += 1;
    }
    table
}

/// Per-blade sign applied by reversion (grades 2 and 3 flip).
pub(crate) const REVERSE_SIGNS: [i8; BLADE_COUNT] = build_reverse_signs();

// The named basis blades.
pub const E1: Multivector = Multivector::basis(1, 1.0);
pub const E2: Multivector = Multivector::basis(2, 1.0);
pub const E3: Multivector = Multivector::basis(3, 1.0);
pub const E4: Multivector = Multivector::basis(4, 1.0);
pub const E5: Multivector = Multivector::basis(5, 1.0);
pub const E12: Multivector = Multivector::basis(6, 1.0);
pub const E13: Multivector = Multivector::basis(7, 1.0);
pub const E14: Multivector = Multivector::basis(8, 1.0);
pub const E15: Multivector = Multivector::basis(9, 1.0);
pub const E23: Multivector = Multivector::basis(10, 1.0);
pub const E24: Multivector = Multivector::basis(11, 1.0);
pub const E25: Multivector = Multivector::basis(12, 1.0);
pub const E34: Multivector = Multivector::basis(13, 1.0);
pub const E35: Multivector = Multivector::basis(14, 1.0);
pub const E45: Multivector = Multivector::basis(15, 1.0);
pub const E123: Multivector = Multivector::basis(16, 1.0);
pub const E124: Multivector = Multivector::basis(17, 1.0);
pub const E125: Multivector = Multivector::basis(18, 1.0);
pub const E134: Multivector = Multivector::basis(19, 1.0);
pub const E135: Multivector = Multivector::basis(20, 1.0);
pub const E145: Multivector = Multivector::basis(21, 1.0);
pub const E234: Multivector = Multivector::basis(22, 1.0);
pub const E235: Multivector = Multivector::basis(23, 1.0);
pub const E245: Multivector = Multivector::basis(24, 1.0);
pub const E345: Multivector = Multivector::basis(25, 1.0);
pub const E1234: Multivector = Multivector::basis(26, 1.0);
pub const E1235: Multivector = Multivector::basis(27, 1.0);
pub const E1245: Multivector = Multivector::basis(28, 1.0);
pub const E1345: Multivector = Multivector::basis(29, 1.0);
pub const E2345: Multivector = Multivector::basis(30, 1.0);
pub const E12345: Multivector = Multivector::basis(31, 1.0);

/// The null vector at infinity: `e4 + e5`.
pub const E_INF: Multivector = {
    let mut c = [0.0f32; BLADE_COUNT];
    c[4] = 1.0;
    c[5] = 1.0;
    Multivector::from_coefficients(c)
};

/// The null vector at the origin: `0.5 * (e5 - e4)`.
pub const E_ORIGIN: Multivector = {
    let mut c = [0.0f32; BLADE_COUNT];
    c[4] = -0.5;
    c[5] = 0.5;
    Multivector::from_coefficients(c)
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_are_a_permutation() {
        for i in 0..BLADE_COUNT {
            assert_eq!(MASK_TO_INDEX[BLADE_MASKS[i] as usize] as usize, i);
        }
    }

    #[test]
    fn test_grade_layout() {
        let expected = [
            0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4,
            4, 4, 4, 5,
        ];
        assert_eq!(GRADES, expected);
    }

    #[test]
    fn test_basis_vectors_square_to_metric() {
        for (i, sq) in [(1usize, 1i8), (2, 1), (3, 1), (4, 1), (5, -1)] {
            let (target, sign) = GEOMETRIC[i][i];
            assert_eq!(target, 0, "e{} squared must be scalar", i);
            assert_eq!(sign, sq, "e{} squared", i);
        }
    }

    #[test]
    fn test_basis_vectors_anticommute() {
        for i in 1..=5 {
            for j in 1..=5 {
                if i == j {
                    continue;
                }
                let (tij, sij) = GEOMETRIC[i][j];
                let (tji, sji) = GEOMETRIC[j][i];
                assert_eq!(tij, tji);
                assert_eq!(sij, -sji, "e{} and e{} must anticommute", i, j);
            }
        }
    }

    #[test]
    fn test_reversion_signs_by_grade() {
        // The scalar blade reverses to itself.
        assert_eq!(REVERSE_SIGNS[0], 1);
        for i in 0..BLADE_COUNT {
            let expected = match GRADES[i] {
                2 | 3 => -1,
                _ => 1,
            };
            assert_eq!(REVERSE_SIGNS[i], expected, "blade {}", BLADE_NAMES[i]);
        }
    }

    #[test]
    fn test_null_vector_identities() {
        // e_inf^2 == 0 and e_origin^2 == 0, in all 32 coefficients.
        assert_eq!(E_INF * E_INF, Multivector::ZERO);
        assert_eq!(E_ORIGIN * E_ORIGIN, Multivector::ZERO);
        // e_origin . e_inf == -1
        let dot = E_ORIGIN.inner(&E_INF);
        assert_eq!(dot[0], -1.0);
    }

    #[test]
    fn test_inf_wedge_origin_is_e45() {
        assert_eq!(E_INF.outer(&E_ORIGIN), E45);
    }
}
