//! Elevation keys on the 0.01 m grid

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// Number of key units per metre
const KEY_SCALE: f64 = 100.0;

/// Largest distance from the grid (in key units) still accepted as an exact elevation
const GRID_TOLERANCE: f64 = 1e-6;

/// Round an elevation to 2 decimal places
///
/// Applied after every integration step so that repeated additions of 0.01 or 0.1
/// land back on tabulated elevations instead of drifting away from them.
pub fn round_to_hundredths(z: f64) -> f64 {
    (z * KEY_SCALE).round() / KEY_SCALE
}

/// Check that `step` advances a sweep by a whole number of grid points
///
/// Anything finer than 0.01 m would be rounded back onto the elevation it started from.
pub fn validate_step(step: f64) -> LoadResult<()> {
    match ElevationKey::exact(step) {
        Some(key) if key.hundredths() > 0 => Ok(()),
        _ => Err(LoadError::InvalidInput(format!(
            "step must be a positive multiple of 0.01 m, got {step}"
        ))),
    }
}

/// Exact lookup key for an elevation, in hundredths of a metre
///
/// Profiles never interpolate: an elevation has a key only if it lies on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElevationKey(i64);

impl ElevationKey {
    /// Key of `z` if it lies on the 0.01 m grid
    pub fn exact(z: f64) -> Option<Self> {
        if !z.is_finite() {
            return None;
        }
        let scaled = z * KEY_SCALE;
        if (scaled - scaled.round()).abs() > GRID_TOLERANCE {
            return None;
        }
        Some(Self(scaled.round() as i64))
    }

    /// Elevation in metres
    pub fn metres(self) -> f64 {
        self.0 as f64 / KEY_SCALE
    }

    /// Raw value in hundredths of a metre
    pub fn hundredths(self) -> i64 {
        self.0
    }
}
