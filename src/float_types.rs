//! Scalar type and constants shared across the crate.
//!
//! Generation runs in `Real` precision end to end; coordinates are only
//! narrowed to `f32` when a facet is serialized into an STL record.

/// Our Real scalar type.
pub type Real = f64;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
