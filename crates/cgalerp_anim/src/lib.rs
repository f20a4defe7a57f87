//! Pose blending over the conformal algebra R(4,1)
//!
//! This crate converts engine-native poses (position + unit quaternion +
//! uniform scale) into combined translation-rotation-dilation rotors,
//! decomposes them back, and blends two precomputed rigid rotors per frame:
//!
//! - [`Pose`] - host-facing pose value
//! - [`rotor`] - translation/rotation/dilation rotor construction
//! - [`extract`] - rotor decomposition back to pose data
//! - [`TrdLerp`] - precompute-once, evaluate-per-tick interpolation
//! - [`MvPool`] - generation-checked storage for frame-persistent rotors
//! - [`DecomposeError`] - numeric degeneracy surfaced as an error

mod error;
pub mod extract;
pub mod lerp;
mod pool;
mod pose;
pub mod rotor;

pub use error::DecomposeError;
pub use lerp::{evaluate, lerp_tr, TrdLerp, TR_BLEND_SLOTS};
pub use pool::{MvKey, MvPool};
pub use pose::Pose;

// Re-export commonly used math types for convenience
pub use cgalerp_math::{Multivector, Quat, Vec3};
