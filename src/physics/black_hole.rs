use crate::physics::constants::{C_SI, G_SI, SOLAR_MASS};
use crate::physics::Vec3;

/// A single gravitational body.
///
/// The Schwarzschild radius `r_s = 2GM/c^2` is fixed at construction and is
/// used only as a display-scale factor for the rendered sphere.
#[derive(Debug, Clone)]
pub struct BlackHole {
    pub position: Vec3,
    pub mass: f64, // kg
    pub r_s: f64,  // m
}

impl BlackHole {
    pub fn new(position: Vec3, mass: f64) -> Self {
        let r_s = 2.0 * G_SI * mass / (C_SI * C_SI);
        Self { position, mass, r_s }
    }

    /// Body at the origin with the given mass in solar masses.
    pub fn with_solar_masses(mass_solar: f64) -> Self {
        Self::new(Vec3::zeros(), mass_solar * SOLAR_MASS)
    }

    /// Radius in scene units. Normalized so a one-solar-mass horizon spans a
    /// unit sphere; the actual r_s is a few kilometers and would be invisible.
    pub fn display_radius(&self) -> f32 {
        let r_s_sun = 2.0 * G_SI * SOLAR_MASS / (C_SI * C_SI);
        (self.r_s / r_s_sun) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn schwarzschild_radius_of_the_sun() {
        let bh = BlackHole::with_solar_masses(1.0);
        // 2 * G * M_sun / c^2 ~= 2.95 km
        assert_relative_eq!(bh.r_s, 2953.25, max_relative = 1e-3);
    }

    #[test]
    fn radius_scales_linearly_with_mass() {
        let one = BlackHole::with_solar_masses(1.0);
        let ten = BlackHole::with_solar_masses(10.0);
        assert_relative_eq!(ten.r_s, 10.0 * one.r_s, max_relative = 1e-12);
        assert_relative_eq!(one.display_radius(), 1.0, max_relative = 1e-6);
        assert_relative_eq!(ten.display_radius(), 10.0, max_relative = 1e-6);
    }
}
