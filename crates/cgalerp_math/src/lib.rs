//! Conformal geometric algebra over R(4,1)
//!
//! This crate provides the algebraic foundation for the cgalerp engine:
//! a 32-component [`Multivector`] with table-driven products, the basis
//! blade constants of the conformal model, round-object embeddings, and
//! the host-facing [`Vec3`] / [`Quat`] value types.
//!
//! ## Core Types
//!
//! - [`Multivector`] - element of the 32-dimensional algebra R(4,1)
//! - [`Vec3`] - 3D position vector
//! - [`Quat`] - unit rotation quaternion
//!
//! ## Modules
//!
//! - [`basis`] - named basis blades, `e_inf`/`e_origin`, compile-time tables
//! - [`objects`] - conformal spheres and points

pub mod basis;
mod multivector;
pub mod objects;
mod quat;
mod vec3;

pub use multivector::Multivector;
pub use quat::Quat;
pub use vec3::Vec3;
