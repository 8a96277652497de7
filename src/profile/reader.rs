//! CSV source for environmental profiles
//!
//! Wind files carry two columns (elevation, velocity). Wave files carry four
//! (elevation, velocity, acceleration, particle velocity). The first row is a header.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use super::table::{Profile, WaveProfile, WaveSample, WindProfile, WindSample};
use crate::error::{LoadError, LoadResult};

/// Read a wave/current profile from CSV text
pub fn read_wave_profile<R: Read>(reader: R, label: &str) -> LoadResult<WaveProfile> {
    read_profile(reader, label, 4, |values| {
        WaveSample::new(values[1], values[2], values[3])
    })
}

/// Read a wind profile from CSV text
pub fn read_wind_profile<R: Read>(reader: R, label: &str) -> LoadResult<WindProfile> {
    read_profile(reader, label, 2, |values| WindSample::new(values[1]))
}

/// Load a wave/current profile from a CSV file
pub fn load_wave_profile<P: AsRef<Path>>(path: P) -> LoadResult<WaveProfile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_wave_profile(file, &format!("wave ({})", path.display()))
}

/// Load a wind profile from a CSV file
pub fn load_wind_profile<P: AsRef<Path>>(path: P) -> LoadResult<WindProfile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_wind_profile(file, &format!("wind ({})", path.display()))
}

fn read_profile<R, S, F>(reader: R, label: &str, columns: usize, sample: F) -> LoadResult<Profile<S>>
where
    R: Read,
    F: Fn(&[f64]) -> S,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut profile = Profile::new(label);
    let mut values = Vec::with_capacity(columns);

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        parse_row(&record, columns, &mut values).map_err(|message| LoadError::MalformedData {
            source_name: label.to_string(),
            line,
            message,
        })?;

        profile
            .insert(values[0], sample(values.as_slice()))
            .map_err(|err| match err {
                LoadError::DuplicateElevation {
                    profile: name,
                    elevation,
                    ..
                } => LoadError::DuplicateElevation {
                    profile: name,
                    elevation,
                    line: Some(line),
                },
                LoadError::InvalidInput(message) => LoadError::MalformedData {
                    source_name: label.to_string(),
                    line,
                    message,
                },
                other => other,
            })?;
    }

    if profile.is_empty() {
        return Err(LoadError::EmptyProfile(label.to_string()));
    }

    debug!(
        "Loaded {} profile: {} rows, {:?} to {:?} m",
        label,
        profile.len(),
        profile.min_elevation(),
        profile.max_elevation()
    );

    Ok(profile)
}

fn parse_row(record: &StringRecord, columns: usize, values: &mut Vec<f64>) -> Result<(), String> {
    if record.len() < columns {
        return Err(format!(
            "expected {} columns, found {}",
            columns,
            record.len()
        ));
    }
    values.clear();
    for (i, field) in record.iter().take(columns).enumerate() {
        let value: f64 = field
            .parse()
            .map_err(|_| format!("column {}: '{}' is not a number", i + 1, field))?;
        if !value.is_finite() {
            return Err(format!("column {}: '{}' is not finite", i + 1, field));
        }
        values.push(value);
    }
    Ok(())
}
