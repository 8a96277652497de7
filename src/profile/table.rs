//! Tabulated kinematics keyed by elevation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::elevation::{round_to_hundredths, validate_step, ElevationKey};
use crate::error::{LoadError, LoadResult};

/// Kinematics of the wave/current field at one elevation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSample {
    /// Total horizontal velocity (m/s)
    pub velocity: f64,
    /// Particle acceleration (m/s²)
    pub acceleration: f64,
    /// Particle (transverse) velocity (m/s)
    pub particle_velocity: f64,
}

impl WaveSample {
    pub fn new(velocity: f64, acceleration: f64, particle_velocity: f64) -> Self {
        Self {
            velocity,
            acceleration,
            particle_velocity,
        }
    }
}

/// Wind speed at one elevation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    /// Wind velocity (m/s)
    pub velocity: f64,
}

impl WindSample {
    pub fn new(velocity: f64) -> Self {
        Self { velocity }
    }
}

/// Ordered elevation -> sample table for a single fluid medium
///
/// Lookups are exact: an elevation resolves only if it rounds to a tabulated key.
#[derive(Debug, Clone)]
pub struct Profile<S> {
    label: String,
    samples: BTreeMap<ElevationKey, S>,
}

/// Wave/current kinematics profile
pub type WaveProfile = Profile<WaveSample>;
/// Wind speed profile
pub type WindProfile = Profile<WindSample>;

impl<S> Profile<S> {
    /// Create an empty profile. `label` names the medium and its source in error messages.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            samples: BTreeMap::new(),
        }
    }

    /// Build a profile from (elevation, sample) pairs
    pub fn from_samples<I>(label: &str, samples: I) -> LoadResult<Self>
    where
        I: IntoIterator<Item = (f64, S)>,
    {
        let mut profile = Self::new(label);
        for (z, sample) in samples {
            profile.insert(z, sample)?;
        }
        Ok(profile)
    }

    /// Add a tabulated elevation
    pub fn insert(&mut self, z: f64, sample: S) -> LoadResult<()> {
        let key = ElevationKey::exact(z).ok_or_else(|| {
            LoadError::InvalidInput(format!(
                "elevation {z} m in the {} profile is not on the 0.01 m grid",
                self.label
            ))
        })?;
        if self.samples.contains_key(&key) {
            return Err(LoadError::DuplicateElevation {
                profile: self.label.clone(),
                elevation: key.metres(),
                line: None,
            });
        }
        self.samples.insert(key, sample);
        Ok(())
    }

    /// Sample tabulated at `z`
    ///
    /// `z` must sit on the 0.01 m grid; an elevation between grid points never
    /// resolves to its neighbour.
    pub fn get(&self, z: f64) -> LoadResult<&S> {
        ElevationKey::exact(z)
            .and_then(|key| self.samples.get(&key))
            .ok_or_else(|| LoadError::ElevationNotFound {
                profile: self.label.clone(),
                elevation: z,
            })
    }

    /// Check whether `z` is tabulated
    pub fn contains(&self, z: f64) -> bool {
        ElevationKey::exact(z).is_some_and(|key| self.samples.contains_key(&key))
    }

    /// Lowest tabulated elevation
    pub fn min_elevation(&self) -> Option<f64> {
        self.samples.keys().next().map(|k| k.metres())
    }

    /// Highest tabulated elevation
    pub fn max_elevation(&self) -> Option<f64> {
        self.samples.keys().next_back().map(|k| k.metres())
    }

    /// Tabulated elevations in ascending order
    pub fn elevations(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.keys().map(|k| k.metres())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Elevations an integration sweep from `lower` to `upper` at `step` would visit
    /// that are not tabulated
    pub fn missing_steps(&self, lower: f64, upper: f64, step: f64) -> LoadResult<Vec<f64>> {
        validate_step(step)?;
        let mut missing = Vec::new();
        let mut z = lower;
        while z <= upper {
            if !self.contains(z) {
                missing.push(z);
            }
            z = round_to_hundredths(z + step);
        }
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wind_profile() -> WindProfile {
        Profile::from_samples(
            "wind",
            (0..=10).map(|i| (i as f64 * 0.1, WindSample::new(10.0 + i as f64))),
        )
        .unwrap()
    }

    #[test]
    fn test_exact_lookup() {
        let profile = wind_profile();
        assert_eq!(profile.len(), 11);
        assert_eq!(profile.get(0.3).unwrap().velocity, 13.0);
        // 0.1 + 0.2 carries drift but still resolves to the 0.3 key
        assert_eq!(profile.get(0.1 + 0.2).unwrap().velocity, 13.0);
    }

    #[test]
    fn test_lookup_between_keys_fails() {
        let profile = wind_profile();
        let err = profile.get(0.35).unwrap_err();
        match err {
            LoadError::ElevationNotFound { profile, elevation } => {
                assert_eq!(profile, "wind");
                assert_eq!(elevation, 0.35);
            }
            other => panic!("unexpected error: {other}"),
        }
        // a few millimetres off a key is still a miss
        assert!(profile.get(0.304).is_err());
        assert!(!profile.contains(-0.004 + 0.3));
    }

    #[test]
    fn test_duplicate_elevation_rejected() {
        let mut profile = WindProfile::new("wind");
        profile.insert(1.0, WindSample::new(5.0)).unwrap();
        assert!(matches!(
            profile.insert(1.0, WindSample::new(6.0)),
            Err(LoadError::DuplicateElevation { .. })
        ));
    }

    #[test]
    fn test_bounds_and_order() {
        let profile = WaveProfile::from_samples(
            "wave",
            vec![
                (0.0, WaveSample::new(1.0, 0.1, 0.5)),
                (-0.02, WaveSample::new(1.0, 0.1, 0.5)),
                (-0.01, WaveSample::new(1.0, 0.1, 0.5)),
            ],
        )
        .unwrap();
        assert_eq!(profile.min_elevation(), Some(-0.02));
        assert_eq!(profile.max_elevation(), Some(0.0));
        let zs: Vec<f64> = profile.elevations().collect();
        assert_eq!(zs, vec![-0.02, -0.01, 0.0]);
    }

    #[test]
    fn test_missing_steps() {
        let profile = wind_profile();
        assert!(profile.missing_steps(0.0, 1.0, 0.1).unwrap().is_empty());
        let missing = profile.missing_steps(0.8, 1.2, 0.1).unwrap();
        assert_eq!(missing, vec![1.1, 1.2]);
        assert!(profile.missing_steps(0.0, 1.0, 0.0).is_err());
        assert!(matches!(
            profile.missing_steps(0.0, 1.0, 0.001),
            Err(LoadError::InvalidInput(_))
        ));
        // off-grid lower bound is reported instead of snapping to 0.5
        assert_eq!(profile.missing_steps(0.505, 0.6, 0.1).unwrap(), vec![0.505]);
    }
}
