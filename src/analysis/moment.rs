//! Mudline overturning moment

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LoadResult;
use crate::loads::LoadCase;
use crate::profile::round_to_hundredths;

/// Elevation step below the waterline, matching the wave tabulation (m)
pub const SUBMERGED_STEP: f64 = 0.01;
/// Elevation step above the waterline, matching the wind tabulation (m)
pub const AIRBORNE_STEP: f64 = 0.1;

/// Overturning moment split at the waterline (N·m)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentBreakdown {
    /// Wave/current contribution, z < 0
    pub submerged: f64,
    /// Wind contribution, z >= 0
    pub airborne: f64,
}

impl MomentBreakdown {
    pub fn total(&self) -> f64 {
        self.submerged + self.airborne
    }
}

/// Elevations visited by the moment sweep from `seabed` up to `top`
///
/// Steps by [`SUBMERGED_STEP`] while below zero and by [`AIRBORNE_STEP`] from zero up,
/// rounding to 2 decimals after each step.
pub fn sweep_elevations(seabed: f64, top: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(seabed), |&z| {
        let step = if z < 0.0 { SUBMERGED_STEP } else { AIRBORNE_STEP };
        Some(round_to_hundredths(z + step))
    })
    .take_while(move |&z| z <= top)
}

/// Mudline overturning moment of a load case (N·m)
///
/// Sum of `(drag + inertia) * (z - seabed)` over the sweep elevations. Each addend is
/// already a discrete moment contribution and is not scaled by the step.
pub fn mudline_overturning_moment(case: &LoadCase) -> LoadResult<f64> {
    Ok(mudline_moment_breakdown(case)?.total())
}

/// Mudline overturning moment with the submerged and airborne parts kept apart
pub fn mudline_moment_breakdown(case: &LoadCase) -> LoadResult<MomentBreakdown> {
    let seabed = case.seabed();
    let top = case.top();
    let mut moment = MomentBreakdown::default();
    let mut steps = 0usize;

    for z in sweep_elevations(seabed, top) {
        let arm = z - seabed;
        if z < 0.0 {
            moment.submerged += case.wave_current_force(z)?.total() * arm;
        } else {
            moment.airborne += case.wind_force(z)?.total() * arm;
        }
        steps += 1;
    }

    debug!(
        "{}: moment sweep from {} to {} m in {} steps",
        case.name(),
        seabed,
        top,
        steps
    );

    Ok(moment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FluidProperties, StructureConfig};
    use crate::error::LoadError;
    use crate::loads::CaseCoefficients;
    use crate::profile::{Profile, WaveSample, WindProfile, WindSample};
    use approx::assert_relative_eq;

    /// Wave tabulated every 0.01 m on [seabed, 0], wind every 0.1 m on [0, top],
    /// both with constant kinematics
    fn uniform_case(seabed_cm: i64, top_dm: i64) -> LoadCase {
        let wave = Profile::from_samples(
            "wave",
            (seabed_cm..=0).map(|i| (i as f64 / 100.0, WaveSample::new(1.0, 0.5, 2.0))),
        )
        .unwrap();
        let wind = Profile::from_samples(
            "wind",
            (0..=top_dm).map(|i| (i as f64 / 10.0, WindSample::new(10.0))),
        )
        .unwrap();
        LoadCase::new(
            "uniform",
            wave,
            wind,
            CaseCoefficients::new(5.0, 0.62, 2.0, 0.6),
            StructureConfig::default(),
            FluidProperties::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_sweep_switches_step_at_waterline() {
        let zs: Vec<f64> = sweep_elevations(-0.03, 0.3).collect();
        assert_eq!(zs, vec![-0.03, -0.02, -0.01, 0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_sweep_stops_above_top() {
        let zs: Vec<f64> = sweep_elevations(-1.0, -0.98).collect();
        assert_eq!(zs, vec![-1.0, -0.99, -0.98]);
        assert_eq!(sweep_elevations(0.5, 0.0).count(), 0);
    }

    #[test]
    fn test_lever_arms_and_step_switch() {
        // wave on [-1, 0], wind on [0, 1]
        let case = uniform_case(-100, 10);
        let wave_force = case.wave_current_force(-1.0).unwrap().total();
        let wind_force = case.wind_force(1.0).unwrap().total();

        // submerged arms 0.00 .. 0.99, airborne arms 1.0 .. 2.0
        let submerged_arms: f64 = (0..100).map(|i| i as f64 / 100.0).sum();
        let airborne_arms: f64 = (0..=10).map(|i| 1.0 + i as f64 / 10.0).sum();

        let moment = case.mudline_moment_breakdown().unwrap();
        assert_relative_eq!(moment.submerged, wave_force * submerged_arms, max_relative = 1e-12);
        assert_relative_eq!(moment.airborne, wind_force * airborne_arms, max_relative = 1e-12);
        assert_relative_eq!(
            case.mudline_overturning_moment().unwrap(),
            moment.total(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_top_contribution_uses_full_arm() {
        let case = uniform_case(-100, 10);
        let zs: Vec<f64> = sweep_elevations(case.seabed(), case.top()).collect();
        assert_eq!(zs.len(), 100 + 11);
        assert_eq!(*zs.last().unwrap(), 1.0);
        // the last addend is wind_force(1) * 2
        assert_relative_eq!(zs.last().unwrap() - case.seabed(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_seabed_contributes_nothing() {
        // a single submerged elevation sits on the mudline and has zero arm
        let wave = Profile::from_samples(
            "wave",
            [(-0.01, WaveSample::new(1.0, 3.0, 5.0))],
        )
        .unwrap();
        let wind = WindProfile::from_samples("wind", [(0.0, WindSample::new(12.0))]).unwrap();
        let case = LoadCase::new(
            "single",
            wave,
            wind,
            CaseCoefficients::new(5.0, 0.62, 2.0, 0.6),
            StructureConfig::default(),
            FluidProperties::default(),
        )
        .unwrap();

        let moment = case.mudline_moment_breakdown().unwrap();
        assert_eq!(moment.submerged, 0.0);
        assert_relative_eq!(
            moment.airborne,
            case.wind_force(0.0).unwrap().total() * 0.01,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_gap_in_wind_profile_fails() {
        let wave = Profile::from_samples("wave", [(-0.01, WaveSample::new(1.0, 1.0, 1.0))]).unwrap();
        let wind = WindProfile::from_samples(
            "wind",
            [(0.0, WindSample::new(8.0)), (0.2, WindSample::new(8.0))],
        )
        .unwrap();
        let case = LoadCase::new(
            "gap",
            wave,
            wind,
            CaseCoefficients::new(5.0, 0.62, 2.0, 0.6),
            StructureConfig::default(),
            FluidProperties::default(),
        )
        .unwrap();

        match case.mudline_overturning_moment().unwrap_err() {
            LoadError::ElevationNotFound { profile, elevation } => {
                assert_eq!(profile, "wind");
                assert_relative_eq!(elevation, 0.1, epsilon = 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
