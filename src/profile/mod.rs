//! Environmental profiles: wave/current and wind kinematics by elevation

mod elevation;
mod reader;
mod table;

pub use elevation::{round_to_hundredths, validate_step, ElevationKey};
pub use reader::{load_wave_profile, load_wind_profile, read_wave_profile, read_wind_profile};
pub use table::{Profile, WaveProfile, WaveSample, WindProfile, WindSample};
