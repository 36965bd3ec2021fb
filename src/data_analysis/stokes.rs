// src/data_analysis/stokes.rs
//
// Stokes' law terminal settling velocity for small spheres in a viscous fluid.

use crate::constants::{
    GRAVITY_M_S2, KAOLINITE_DENSITY_KG_M3, KAOLINITE_DIAMETER_M, SAND_DENSITY_KG_M3,
    SAND_DIAMETER_M, TEST_SEDIMENT_DENSITY_KG_M3, TEST_SEDIMENT_DIAMETER_M,
    WATER_DYNAMIC_VISCOSITY_PA_S,
};

/// Terminal settling velocity in m/s: `(ρp − ρf) · g · D² / (18 · μ)`.
///
/// Positive means the particle sinks. Inverted density ordering yields a
/// negative (rising) velocity; this is returned as-is.
pub fn stokes_settling_velocity(
    particle_density_kg_m3: f64,
    fluid_density_kg_m3: f64,
    diameter_m: f64,
) -> f64 {
    (particle_density_kg_m3 - fluid_density_kg_m3) * GRAVITY_M_S2 * diameter_m.powi(2)
        / (18.0 * WATER_DYNAMIC_VISCOSITY_PA_S)
}

/// A named particle class with fixed density and diameter
#[derive(Debug, Clone, PartialEq)]
pub struct SettlingParticle {
    pub name: &'static str,
    pub particle_density_kg_m3: f64,
    pub diameter_m: f64,
}

impl SettlingParticle {
    pub const fn new(name: &'static str, particle_density_kg_m3: f64, diameter_m: f64) -> Self {
        Self {
            name,
            particle_density_kg_m3,
            diameter_m,
        }
    }

    pub fn theoretical_velocity(&self, fluid_density_kg_m3: f64) -> f64 {
        stokes_settling_velocity(
            self.particle_density_kg_m3,
            fluid_density_kg_m3,
            self.diameter_m,
        )
    }
}

/// Particle classes reported alongside the experimental results.
pub const THEORETICAL_PRESETS: [SettlingParticle; 3] = [
    SettlingParticle::new("Kaolinite", KAOLINITE_DENSITY_KG_M3, KAOLINITE_DIAMETER_M),
    SettlingParticle::new("Sand", SAND_DENSITY_KG_M3, SAND_DIAMETER_M),
    SettlingParticle::new(
        "Test Fluid",
        TEST_SEDIMENT_DENSITY_KG_M3,
        TEST_SEDIMENT_DIAMETER_M,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEA_WATER_DENSITY_KG_M3;

    #[test]
    fn test_velocity_scales_with_diameter_squared() {
        let v1 = stokes_settling_velocity(2650.0, 1025.0, 10e-6);
        let v2 = stokes_settling_velocity(2650.0, 1025.0, 20e-6);
        let v3 = stokes_settling_velocity(2650.0, 1025.0, 30e-6);
        assert!((v2 / v1 - 4.0).abs() < 1e-9);
        assert!((v3 / v1 - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_linear_in_density_difference() {
        let d = 8.5e-6;
        let base = stokes_settling_velocity(1525.0, 1025.0, d); // Δρ = 500
        let double = stokes_settling_velocity(2025.0, 1025.0, d); // Δρ = 1000
        assert!((double / base - 2.0).abs() < 1e-9);

        // Same difference, shifted densities
        let shifted = stokes_settling_velocity(1600.0, 1100.0, d);
        assert!((shifted - base).abs() < 1e-15);
    }

    #[test]
    fn test_known_value() {
        // (2620 - 1025) * 9.81 * (8.5e-6)^2 / (18 * 1.07e-3)
        let expected = 1595.0 * 9.81 * 7.225e-11 / 0.01926;
        let v = stokes_settling_velocity(2620.0, SEA_WATER_DENSITY_KG_M3, 8.5e-6);
        assert!((v - expected).abs() < 1e-12);
        assert!(v > 5.8e-5 && v < 5.9e-5, "got {v:e}");
    }

    #[test]
    fn test_inverted_densities_give_negative_velocity() {
        let v = stokes_settling_velocity(900.0, 1025.0, 50e-6);
        assert!(v < 0.0);
    }

    #[test]
    fn test_presets() {
        let sand = &THEORETICAL_PRESETS[1];
        let kaolinite = &THEORETICAL_PRESETS[0];
        assert_eq!(sand.name, "Sand");
        // Same density, 25x diameter → 625x velocity
        let ratio = sand.theoretical_velocity(SEA_WATER_DENSITY_KG_M3)
            / kaolinite.theoretical_velocity(SEA_WATER_DENSITY_KG_M3);
        assert!((ratio - 625.0).abs() < 1e-6);
    }
}

// src/data_analysis/stokes.rs
