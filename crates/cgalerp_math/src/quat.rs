//! Unit quaternion type for host-facing rotation data
//!
//! The core only reads quaternions at interpolation start/end and writes
//! them back after decomposition; all intermediate rotation math happens
//! on multivector rotors.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Vec3;

/// Quaternion `w + x*i + y*j + z*k`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity rotation
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Quat
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians around `axis` (normalized internally)
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let axis = axis.normalized();
        let s = half.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length; a zero quaternion becomes the identity
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            let inv = 1.0 / len;
            Self {
                x: self.x * inv,
                y: self.y * inv,
                z: self.z * inv,
                w: self.w * inv,
            }
        } else {
            Self::IDENTITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_identity_is_unit() {
        assert_eq!(Quat::IDENTITY.length(), 1.0);
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quat::from_axis_angle(Vec3::Z, PI);
        assert!((q.z - 1.0).abs() < EPSILON);
        assert!(q.w.abs() < EPSILON);
        assert!((q.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalized() {
        let q = Quat::new(0.0, 0.0, 3.0, 4.0).normalized();
        assert!((q.z - 0.6).abs() < EPSILON);
        assert!((q.w - 0.8).abs() < EPSILON);
        assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalized(), Quat::IDENTITY);
    }
}
