//! Monopile Loads - hydrodynamic and aerodynamic loading on an offshore wind turbine
//!
//! This library evaluates design load cases for a monopile support structure from
//! tabulated wave/current and wind kinematics:
//! - Wave-current drag and inertia per unit length (Morison-type formulas)
//! - Wind drag and inertia on the tower, rotor thrust at rated wind speed
//! - Fixed-step integration of force over elevation
//! - Mudline overturning moment with separate steps below and above the waterline
//!
//! Profiles are looked up by exact elevation; integration steps must match the
//! tabulation spacing of the data (0.01 m for waves, 0.1 m for wind).
//!
//! ## Example
//! ```rust
//! use monopile_loads::prelude::*;
//!
//! let wave = WaveProfile::from_samples(
//!     "wave",
//!     (-100..=0).map(|i| (i as f64 / 100.0, WaveSample::new(1.2, 0.4, 0.9))),
//! ).unwrap();
//! let wind = WindProfile::from_samples(
//!     "wind",
//!     (0..=50).map(|i| (i as f64 / 10.0, WindSample::new(11.0))),
//! ).unwrap();
//!
//! let case = LoadCase::new(
//!     "1.1",
//!     wave,
//!     wind,
//!     CaseCoefficients::new(5.0, 0.0, 2.0, 0.6),
//!     StructureConfig::default(),
//!     FluidProperties::default(),
//! ).unwrap();
//!
//! let wave_totals = case
//!     .wave_current_totals(&IntegrationBounds::new(-1.0, 0.0, 0.01))
//!     .unwrap();
//! let moment = case.mudline_overturning_moment().unwrap();
//! assert!(wave_totals[1] > 0.0 && moment > 0.0);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod loads;
pub mod profile;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        integrate, mudline_moment_breakdown, mudline_overturning_moment, MomentBreakdown,
    };
    pub use crate::config::{
        FluidProperties, IntegrationBounds, LoadCaseConfig, ProjectConfig, RotorConfig,
        StructureConfig,
    };
    pub use crate::error::{LoadError, LoadResult};
    pub use crate::loads::{CaseCoefficients, ForceSample, LoadCase};
    pub use crate::profile::{
        load_wave_profile, load_wind_profile, read_wave_profile, read_wind_profile, Profile,
        WaveProfile, WaveSample, WindProfile, WindSample,
    };
    pub use crate::results::{evaluate, evaluate_case, evaluate_project, LoadCaseReport};
}
