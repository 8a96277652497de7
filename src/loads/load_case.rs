//! Design load cases

use std::f64::consts::PI;

use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::force::{self, ForceSample};
use crate::analysis::{self, MomentBreakdown};
use crate::config::{FluidProperties, IntegrationBounds, StructureConfig};
use crate::error::{LoadError, LoadResult};
use crate::profile::{WaveProfile, WindProfile};

/// Case-specific period and load coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseCoefficients {
    /// Wave period T (s)
    pub wave_period: f64,
    /// Wave/current drag coefficient C_D
    pub drag: f64,
    /// Wave inertia coefficient C_M
    pub inertia: f64,
    /// Wind drag coefficient
    pub wind_drag: f64,
    /// Wind inertia coefficient, zero while the wind KC number is negligible
    pub wind_inertia: f64,
}

impl CaseCoefficients {
    pub fn new(wave_period: f64, drag: f64, inertia: f64, wind_drag: f64) -> Self {
        Self {
            wave_period,
            drag,
            inertia,
            wind_drag,
            wind_inertia: 0.0,
        }
    }

    pub fn with_wind_inertia(mut self, wind_inertia: f64) -> Self {
        self.wind_inertia = wind_inertia;
        self
    }

    /// Angular frequency ω = 2π / T
    pub fn omega(&self) -> f64 {
        2.0 * PI / self.wave_period
    }

    pub fn validate(&self) -> LoadResult<()> {
        if !(self.wave_period.is_finite() && self.wave_period > 0.0) {
            return Err(LoadError::InvalidInput(format!(
                "wave period must be positive, got {}",
                self.wave_period
            )));
        }
        let coefficients = [
            ("drag", self.drag),
            ("inertia", self.inertia),
            ("wind_drag", self.wind_drag),
            ("wind_inertia", self.wind_inertia),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(LoadError::InvalidInput(format!(
                    "{name} coefficient must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// One wave profile and one wind profile with their coefficients
///
/// Immutable once built. All force queries take elevations that must be tabulated
/// in the corresponding profile.
#[derive(Debug, Clone)]
pub struct LoadCase {
    name: String,
    wave: WaveProfile,
    wind: WindProfile,
    coefficients: CaseCoefficients,
    structure: StructureConfig,
    fluids: FluidProperties,
    omega: f64,
}

impl LoadCase {
    /// Create a load case from already-built profiles
    pub fn new(
        name: &str,
        wave: WaveProfile,
        wind: WindProfile,
        coefficients: CaseCoefficients,
        structure: StructureConfig,
        fluids: FluidProperties,
    ) -> LoadResult<Self> {
        coefficients.validate()?;
        if wave.is_empty() {
            return Err(LoadError::EmptyProfile(wave.label().to_string()));
        }
        if wind.is_empty() {
            return Err(LoadError::EmptyProfile(wind.label().to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            wave,
            wind,
            omega: coefficients.omega(),
            coefficients,
            structure,
            fluids,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wave(&self) -> &WaveProfile {
        &self.wave
    }

    pub fn wind(&self) -> &WindProfile {
        &self.wind
    }

    pub fn coefficients(&self) -> &CaseCoefficients {
        &self.coefficients
    }

    pub fn structure(&self) -> &StructureConfig {
        &self.structure
    }

    pub fn fluids(&self) -> &FluidProperties {
        &self.fluids
    }

    /// Angular frequency ω (rad/s)
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Lowest wave elevation, taken as the mudline
    pub fn seabed(&self) -> f64 {
        // non-empty by construction
        self.wave.min_elevation().unwrap_or_default()
    }

    /// Highest wind elevation
    pub fn top(&self) -> f64 {
        self.wind.max_elevation().unwrap_or_default()
    }

    /// Wave-current drag per unit length at `z`, from the particle velocity channel
    pub fn wave_current_drag(&self, z: f64) -> LoadResult<f64> {
        let sample = self.wave.get(z)?;
        Ok(force::drag_per_length(
            self.fluids.water_density,
            self.coefficients.drag,
            self.structure.pile_diameter,
            sample.particle_velocity,
        ))
    }

    /// Wave inertia per unit length at `z`, from the particle acceleration channel
    pub fn wave_inertia(&self, z: f64) -> LoadResult<f64> {
        let sample = self.wave.get(z)?;
        Ok(force::inertia_per_length(
            self.fluids.water_density,
            self.coefficients.inertia,
            self.structure.pile_diameter,
            sample.acceleration,
            self.omega,
        ))
    }

    pub fn wave_current_force(&self, z: f64) -> LoadResult<ForceSample> {
        Ok(ForceSample::new(
            self.wave_current_drag(z)?,
            self.wave_inertia(z)?,
        ))
    }

    /// Wind drag per unit length on the tower at `z`
    pub fn wind_drag(&self, z: f64) -> LoadResult<f64> {
        let sample = self.wind.get(z)?;
        Ok(force::drag_per_length(
            self.fluids.air_density,
            self.coefficients.wind_drag,
            self.structure.tower_diameter,
            sample.velocity,
        ))
    }

    /// Wind inertia per unit length at `z`; zero unless a wind inertia coefficient is set
    pub fn wind_inertia(&self, z: f64) -> LoadResult<f64> {
        let sample = self.wind.get(z)?;
        Ok(force::inertia_per_length(
            self.fluids.air_density,
            self.coefficients.wind_inertia,
            self.structure.tower_diameter,
            sample.velocity,
            self.omega,
        ))
    }

    pub fn wind_force(&self, z: f64) -> LoadResult<ForceSample> {
        Ok(ForceSample::new(self.wind_drag(z)?, self.wind_inertia(z)?))
    }

    /// Rotor thrust at rated wind speed (N), independent of elevation
    pub fn rotor_thrust(&self) -> f64 {
        force::rotor_thrust(self.fluids.air_density, &self.structure.rotor)
    }

    /// Integrated wave-current force `[drag, inertia]` over `bounds`
    pub fn wave_current_totals(&self, bounds: &IntegrationBounds) -> LoadResult<Vector2<f64>> {
        analysis::integrate(bounds.lower, bounds.upper, bounds.step, |z| {
            self.wave_current_force(z)
        })
    }

    /// Integrated wind force `[drag, inertia]` over `bounds`
    pub fn wind_totals(&self, bounds: &IntegrationBounds) -> LoadResult<Vector2<f64>> {
        analysis::integrate(bounds.lower, bounds.upper, bounds.step, |z| self.wind_force(z))
    }

    pub fn mudline_overturning_moment(&self) -> LoadResult<f64> {
        analysis::mudline_overturning_moment(self)
    }

    pub fn mudline_moment_breakdown(&self) -> LoadResult<MomentBreakdown> {
        analysis::mudline_moment_breakdown(self)
    }

    /// Verify that every elevation visited by the force integrations and the moment
    /// sweep is tabulated, before any force is computed
    pub fn check_alignment(
        &self,
        wave_bounds: &IntegrationBounds,
        wind_bounds: &IntegrationBounds,
    ) -> LoadResult<()> {
        let integrations = [
            (
                self.wave.label(),
                self.wave
                    .missing_steps(wave_bounds.lower, wave_bounds.upper, wave_bounds.step)?,
            ),
            (
                self.wind.label(),
                self.wind
                    .missing_steps(wind_bounds.lower, wind_bounds.upper, wind_bounds.step)?,
            ),
        ];
        for (profile, missing) in integrations {
            if let Some(&elevation) = missing.first() {
                debug!(
                    "{}: {} untabulated elevations in the {} profile",
                    self.name,
                    missing.len(),
                    profile
                );
                return Err(LoadError::ElevationNotFound {
                    profile: profile.to_string(),
                    elevation,
                });
            }
        }

        for z in analysis::sweep_elevations(self.seabed(), self.top()) {
            let (tabulated, profile) = if z < 0.0 {
                (self.wave.contains(z), self.wave.label())
            } else {
                (self.wind.contains(z), self.wind.label())
            };
            if !tabulated {
                return Err(LoadError::ElevationNotFound {
                    profile: profile.to_string(),
                    elevation: z,
                });
            }
        }
        Ok(())
    }
}
