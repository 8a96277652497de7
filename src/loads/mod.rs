//! Force model and load cases

pub mod force;
mod load_case;

pub use force::ForceSample;
pub use load_case::{CaseCoefficients, LoadCase};
