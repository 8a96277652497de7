//! Physical configuration and load case definitions

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};
use crate::loads::{CaseCoefficients, LoadCase};
use crate::profile::{load_wave_profile, load_wind_profile, validate_step};

/// Rotor geometry and operating point used for the thrust estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// Rotor diameter (m)
    pub diameter: f64,
    /// Thrust coefficient C_T
    pub thrust_coefficient: f64,
    /// Rated wind speed (m/s)
    pub rated_wind_speed: f64,
}

impl RotorConfig {
    /// Swept rotor area (m²)
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.diameter.powi(2) / 4.0
    }
}

impl Default for RotorConfig {
    fn default() -> Self {
        Self {
            diameter: 112.0,
            thrust_coefficient: 0.8,
            rated_wind_speed: 8.5,
        }
    }
}

/// Support structure dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureConfig {
    /// Monopile diameter below the waterline (m)
    pub pile_diameter: f64,
    /// Tower diameter above the waterline (m)
    pub tower_diameter: f64,
    #[serde(default)]
    pub rotor: RotorConfig,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            pile_diameter: 4.5,
            tower_diameter: 4.2,
            rotor: RotorConfig::default(),
        }
    }
}

/// Fluid densities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// Sea water density (kg/m³)
    pub water_density: f64,
    /// Air density (kg/m³)
    pub air_density: f64,
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self {
            water_density: 1025.0,
            air_density: 1.225,
        }
    }
}

/// Elevation range and step of one force integration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationBounds {
    pub lower: f64,
    pub upper: f64,
    pub step: f64,
}

impl IntegrationBounds {
    pub fn new(lower: f64, upper: f64, step: f64) -> Self {
        Self { lower, upper, step }
    }

    /// Bounds must be finite and the step a positive multiple of 0.01 m
    pub fn validate(&self) -> LoadResult<()> {
        if !(self.lower.is_finite() && self.upper.is_finite()) {
            return Err(LoadError::InvalidInput(format!(
                "integration bounds must be finite, got [{}, {}]",
                self.lower, self.upper
            )));
        }
        validate_step(self.step)
    }
}

/// Definition of one design load case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseConfig {
    pub name: String,
    /// Wave/current kinematics CSV
    pub wave_file: PathBuf,
    /// Wind speed CSV
    pub wind_file: PathBuf,
    /// Wave period T (s)
    pub wave_period: f64,
    pub drag_coefficient: f64,
    pub inertia_coefficient: f64,
    pub wind_drag_coefficient: f64,
    /// Zero because the Keulegan-Carpenter number of the wind is negligible
    #[serde(default)]
    pub wind_inertia_coefficient: f64,
    pub wave_bounds: IntegrationBounds,
    pub wind_bounds: IntegrationBounds,
}

impl LoadCaseConfig {
    pub fn coefficients(&self) -> CaseCoefficients {
        CaseCoefficients {
            wave_period: self.wave_period,
            drag: self.drag_coefficient,
            inertia: self.inertia_coefficient,
            wind_drag: self.wind_drag_coefficient,
            wind_inertia: self.wind_inertia_coefficient,
        }
    }
}

/// Project file: structure, fluids and the load cases to evaluate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub structure: StructureConfig,
    #[serde(default)]
    pub fluids: FluidProperties,
    pub load_cases: Vec<LoadCaseConfig>,
    /// Directory relative data paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            structure: StructureConfig::default(),
            fluids: FluidProperties::default(),
            load_cases: vec![
                LoadCaseConfig {
                    name: "1.1".to_string(),
                    wave_file: PathBuf::from("data/timeseries1.1.csv"),
                    wind_file: PathBuf::from("data/wind1.1.csv"),
                    wave_period: 5.0,
                    drag_coefficient: 0.0,
                    inertia_coefficient: 2.0,
                    wind_drag_coefficient: 0.6,
                    wind_inertia_coefficient: 0.0,
                    wave_bounds: IntegrationBounds::new(-22.09, 0.0, 0.01),
                    wind_bounds: IntegrationBounds::new(0.0, 109.3, 0.1),
                },
                LoadCaseConfig {
                    name: "6.1c".to_string(),
                    wave_file: PathBuf::from("data/timeseries6.1.csv"),
                    wind_file: PathBuf::from("data/wind6.1.csv"),
                    wave_period: 7.6,
                    drag_coefficient: 0.62,
                    inertia_coefficient: 1.8,
                    wind_drag_coefficient: 0.7,
                    wind_inertia_coefficient: 0.0,
                    wave_bounds: IntegrationBounds::new(-27.31, 0.0, 0.01),
                    wind_bounds: IntegrationBounds::new(0.0, 104.0, 0.1),
                },
            ],
            base_dir: PathBuf::new(),
        }
    }
}

impl ProjectConfig {
    /// Read a project file. Data paths inside it are relative to the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut config: ProjectConfig = serde_json::from_reader(reader)?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Directory relative data paths are resolved against
    pub fn with_base_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.base_dir = dir.as_ref().to_path_buf();
        self
    }

    fn validate(&self) -> LoadResult<()> {
        let positive = [
            ("pile_diameter", self.structure.pile_diameter),
            ("tower_diameter", self.structure.tower_diameter),
            ("rotor.diameter", self.structure.rotor.diameter),
            ("water_density", self.fluids.water_density),
            ("air_density", self.fluids.air_density),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LoadError::InvalidInput(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        for case in &self.load_cases {
            case.coefficients()
                .validate()
                .and_then(|_| case.wave_bounds.validate())
                .and_then(|_| case.wind_bounds.validate())
                .map_err(|e| e.in_case(&case.name))?;
        }
        Ok(())
    }

    /// Resolve a data path against the project directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Find a load case definition by name
    pub fn case(&self, name: &str) -> LoadResult<&LoadCaseConfig> {
        self.load_cases
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| LoadError::LoadCaseNotFound(name.to_string()))
    }

    /// Read the profiles of one case and build it
    pub fn load_case(&self, case: &LoadCaseConfig) -> LoadResult<LoadCase> {
        info!("Loading load case '{}'", case.name);
        let build = || -> LoadResult<LoadCase> {
            let wave = load_wave_profile(self.resolve(&case.wave_file))?;
            let wind = load_wind_profile(self.resolve(&case.wind_file))?;
            LoadCase::new(
                &case.name,
                wave,
                wind,
                case.coefficients(),
                self.structure,
                self.fluids,
            )
        };
        build().map_err(|e| e.in_case(&case.name))
    }
}
