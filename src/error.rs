//! Error types for load evaluation

use thiserror::Error;

/// Main error type for profile loading and load evaluation
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Elevation {elevation:.2} m is not tabulated in the {profile} profile")]
    ElevationNotFound { profile: String, elevation: f64 },

    #[error("{source_name}, line {line}: {message}")]
    MalformedData {
        source_name: String,
        line: u64,
        message: String,
    },

    #[error("Duplicate elevation {elevation:.2} m in the {profile} profile{}", at_line(.line))]
    DuplicateElevation {
        profile: String,
        elevation: f64,
        /// Source row of the second occurrence, when read from a file
        line: Option<u64>,
    },

    #[error("The {0} profile contains no data rows")]
    EmptyProfile(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Load case '{0}' not found")]
    LoadCaseNotFound(String),

    #[error("Load case '{case}': {source}")]
    Case {
        case: String,
        #[source]
        source: Box<LoadError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl LoadError {
    /// Attach the name of the load case that was being evaluated
    pub fn in_case(self, case: &str) -> Self {
        match self {
            LoadError::Case { .. } => self,
            other => LoadError::Case {
                case: case.to_string(),
                source: Box::new(other),
            },
        }
    }
}

fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(", line {l}")).unwrap_or_default()
}

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_case_wraps_once() {
        let err = LoadError::EmptyProfile("wind".to_string())
            .in_case("1.1")
            .in_case("6.1c");
        match err {
            LoadError::Case { case, source } => {
                assert_eq!(case, "1.1");
                assert!(matches!(*source, LoadError::EmptyProfile(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lookup_message_names_profile_and_elevation() {
        let err = LoadError::ElevationNotFound {
            profile: "wave (timeseries1.1.csv)".to_string(),
            elevation: -3.5,
        };
        assert_eq!(
            err.to_string(),
            "Elevation -3.50 m is not tabulated in the wave (timeseries1.1.csv) profile"
        );
    }
}
