//! Physics layer for the viewer.
//!
//! Deliberately thin: the only derived quantity is the Schwarzschild radius,
//! and it feeds a display scale, not a simulation.

pub mod black_hole;
pub mod constants;

pub use black_hole::BlackHole;

/// Common 3D vector type for physics-side quantities.
pub type Vec3 = nalgebra::Vector3<f64>;
