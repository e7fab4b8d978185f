//! Error types for dataset loading and filter selection.
//!
//! Orchestration code (analyzer, config, the binary) works with
//! `anyhow::Result`; the library surfaces below it return these typed errors
//! so callers can tell a bad choice from a broken dataset.

use std::path::PathBuf;
use thiserror::Error;

/// A user-supplied value that is not one of the supported choices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}', expected one of: {}", .expected.join(", "))]
pub struct ChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: Vec<&'static str>,
}

/// Failure while reading a city's trip dataset. Any of these aborts the
/// whole load; there is no partial result.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed trip data")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: cannot parse start time '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("row {row}: trip duration {value} is not a non-negative number")]
    InvalidDuration { row: usize, value: f64 },

    #[error("row {row}: '{column}' is empty")]
    EmptyStation { row: usize, column: &'static str },
}

/// Raised by the prompt helper when the input stream ends mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input stream closed")]
pub struct InputClosed;
