//! Drag, inertia and rotor thrust formulas

use std::f64::consts::PI;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::RotorConfig;

/// Drag and inertia force per unit length at one elevation (N/m)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceSample {
    pub drag: f64,
    pub inertia: f64,
}

impl ForceSample {
    pub fn new(drag: f64, inertia: f64) -> Self {
        Self { drag, inertia }
    }

    /// Drag plus inertia
    pub fn total(&self) -> f64 {
        self.drag + self.inertia
    }

    /// `[drag, inertia]`
    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.drag, self.inertia)
    }
}

impl From<ForceSample> for Vector2<f64> {
    fn from(sample: ForceSample) -> Self {
        sample.as_vector()
    }
}

/// Drag force per unit length: `0.5 * rho * C_D * D * u²`
pub fn drag_per_length(density: f64, drag_coefficient: f64, diameter: f64, velocity: f64) -> f64 {
    0.5 * density * drag_coefficient * diameter * velocity.powi(2)
}

/// Inertia force per unit length: `rho * pi/4 * C_M * D² * (a * omega)`
///
/// The acceleration is multiplied by the angular frequency, not squared against it.
/// Results are expected to match the reference load tables computed this way.
pub fn inertia_per_length(
    density: f64,
    inertia_coefficient: f64,
    diameter: f64,
    acceleration: f64,
    omega: f64,
) -> f64 {
    density * PI * 0.25 * inertia_coefficient * diameter.powi(2) * (acceleration * omega)
}

/// Rotor thrust at rated wind speed: `0.5 * C_T * rho * V² * A`
pub fn rotor_thrust(air_density: f64, rotor: &RotorConfig) -> f64 {
    0.5 * rotor.thrust_coefficient * air_density * rotor.rated_wind_speed.powi(2) * rotor.area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_drag_per_length() {
        // 0.5 * 1025 * 0.62 * 4.5 * 2²
        assert_relative_eq!(drag_per_length(1025.0, 0.62, 4.5, 2.0), 5719.5, epsilon = 1e-9);
        assert_eq!(drag_per_length(1025.0, 0.0, 4.5, 2.0), 0.0);
    }

    #[test]
    fn test_drag_sign_independent_of_flow_direction() {
        assert_eq!(
            drag_per_length(1.225, 0.6, 4.2, -12.0),
            drag_per_length(1.225, 0.6, 4.2, 12.0)
        );
    }

    #[test]
    fn test_inertia_per_length() {
        let omega = 2.0 * PI / 5.0;
        let expected = 1025.0 * PI / 4.0 * 2.0 * 4.5 * 4.5 * (0.8 * omega);
        assert_relative_eq!(
            inertia_per_length(1025.0, 2.0, 4.5, 0.8, omega),
            expected,
            epsilon = 1e-9
        );
        assert_eq!(inertia_per_length(1.225, 0.0, 4.2, 12.0, omega), 0.0);
    }

    #[test]
    fn test_rotor_thrust() {
        let rotor = RotorConfig::default();
        let expected = 0.5 * 0.8 * 1.225 * 8.5_f64.powi(2) * (PI * 112.0_f64.powi(2) / 4.0);
        assert_relative_eq!(rotor_thrust(1.225, &rotor), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_force_sample() {
        let sample = ForceSample::new(3.0, 4.5);
        assert_eq!(sample.total(), 7.5);
        let v: Vector2<f64> = sample.into();
        assert_eq!(v, Vector2::new(3.0, 4.5));
    }
}
