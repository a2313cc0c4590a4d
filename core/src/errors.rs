//! Error types for the FitTrack analytics core

use thiserror::Error;

/// Errors produced by the analytics core.
///
/// The core has no I/O, so the taxonomy is small: domain-invalid input is a
/// caller bug surfaced as `Validation`, and enum parsing from external string
/// data surfaces as `UnknownValue`. Missing optional data (no profile, empty
/// histories) is never an error; every function defines a fallback instead.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: String },
}
