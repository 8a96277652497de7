//! Result types for load case evaluation

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{IntegrationBounds, LoadCaseConfig, ProjectConfig};
use crate::error::LoadResult;
use crate::loads::LoadCase;

/// Scalar results of one load case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseReport {
    /// Name of the load case
    pub name: String,
    /// Integrated wave-current drag force (N)
    pub wave_current_drag: f64,
    /// Integrated wave inertia force (N)
    pub wave_current_inertia: f64,
    /// Integrated wind drag force (N)
    pub wind_drag: f64,
    /// Integrated wind inertia force (N)
    pub wind_inertia: f64,
    /// Rotor thrust (N)
    pub rotor_thrust: f64,
    /// Mudline overturning moment (N·m)
    pub mudline_overturning_moment: f64,
}

/// Evaluate every result of a load case
///
/// Alignment between the integration steps and the profiles is checked first, so a
/// lookup failure aborts the case before any total is computed.
pub fn evaluate(
    case: &LoadCase,
    wave_bounds: &IntegrationBounds,
    wind_bounds: &IntegrationBounds,
) -> LoadResult<LoadCaseReport> {
    let run = || -> LoadResult<LoadCaseReport> {
        case.check_alignment(wave_bounds, wind_bounds)?;

        let wave = case.wave_current_totals(wave_bounds)?;
        let wind = case.wind_totals(wind_bounds)?;

        Ok(LoadCaseReport {
            name: case.name().to_string(),
            wave_current_drag: wave[0],
            wave_current_inertia: wave[1],
            wind_drag: wind[0],
            wind_inertia: wind[1],
            rotor_thrust: case.rotor_thrust(),
            mudline_overturning_moment: case.mudline_overturning_moment()?,
        })
    };

    let report = run().map_err(|e| e.in_case(case.name()))?;
    info!(
        "Load case '{}': overturning moment {:.2} N·m",
        report.name, report.mudline_overturning_moment
    );
    Ok(report)
}

/// Load the profiles of a configured case and evaluate it
pub fn evaluate_case(config: &ProjectConfig, case: &LoadCaseConfig) -> LoadResult<LoadCaseReport> {
    let load_case = config.load_case(case)?;
    evaluate(&load_case, &case.wave_bounds, &case.wind_bounds)
}

/// Evaluate every case of a project, stopping at the first failure
pub fn evaluate_project(config: &ProjectConfig) -> LoadResult<Vec<LoadCaseReport>> {
    config
        .load_cases
        .iter()
        .map(|case| evaluate_case(config, case))
        .collect()
}

/// Width of the rule printed under each case title
const RULE_WIDTH: usize = 13;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for LoadCaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Load Case {}", self.name)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "Wave-Current Force (Drag): {}", round2(self.wave_current_drag))?;
        writeln!(f, "Wave-Current Force (Inertia): {}", round2(self.wave_current_inertia))?;
        writeln!(f, "Wind Force (Drag): {}", round2(self.wind_drag))?;
        writeln!(f, "Wind Force (Inertia): {}", round2(self.wind_inertia))?;
        writeln!(f, "Rotor Thrust: {}", round2(self.rotor_thrust))?;
        write!(
            f,
            "Mudline Overturning Moment: {}",
            round2(self.mudline_overturning_moment)
        )
    }
}
