//! Decomposition error types
//!
//! Numeric degeneracy while splitting a combined rotor is surfaced as a
//! distinct error instead of letting NaN propagate silently.

use std::fmt;

/// Error type for rotor decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecomposeError {
    /// The transformed sphere's homogeneous weight vanished, so it cannot
    /// be renormalized (the input was not a well-formed TRD rotor)
    ZeroWeight,
    /// The sphere-radius radicand went negative (imaginary radius)
    ImaginaryRadius,
    /// The recovered scale was zero, so the dilation cannot be inverted
    ZeroRadius,
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::ZeroWeight => {
                write!(f, "decomposition failed: transformed sphere weight is zero")
            }
            DecomposeError::ImaginaryRadius => {
                write!(f, "decomposition failed: sphere radius is imaginary")
            }
            DecomposeError::ZeroRadius => {
                write!(f, "decomposition failed: recovered scale is zero")
            }
        }
    }
}

impl std::error::Error for DecomposeError {}
