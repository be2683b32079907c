//! Physical constants (SI).
//!
//! The viewer does no physics beyond the Schwarzschild radius computed at
//! construction time; these constants exist for that one formula.

pub const C_SI: f64 = 299_792_458.0; // Speed of light (m/s)
pub const G_SI: f64 = 6.674_30e-11; // Gravitational constant (m^3 kg^-1 s^-2)
pub const SOLAR_MASS: f64 = 1.988_47e30; // Solar mass (kg)
