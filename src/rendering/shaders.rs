//! Embedded shader sources.
//!
//! The inline WGSL is configuration, not logic; it is compiled into the
//! binary so the viewer has no runtime asset dependency.

pub const SPHERE: &str = include_str!("sphere.wgsl");
