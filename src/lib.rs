//! cgalerp - conformal-algebra pose interpolation
//!
//! Blends translation, rotation and uniform scale between two poses as a
//! single rotor of the conformal algebra R(4,1) instead of interpolating
//! position, quaternion and scale separately.

pub mod config;

pub use cgalerp_anim::{evaluate, DecomposeError, MvKey, MvPool, Pose, TrdLerp};
pub use cgalerp_math::{Multivector, Quat, Vec3};
