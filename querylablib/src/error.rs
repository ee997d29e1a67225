//! Error types for querylablib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading data or running exercises
#[derive(Error, Debug)]
pub enum QueryLabError {
    /// Failed to read a dataset file
    #[error("failed to read dataset '{path}': {source}")]
    DatasetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset contents are not valid JSON of the expected shape
    #[error("failed to parse dataset from {origin}: {source}")]
    DatasetParse {
        origin: String,
        source: serde_json::Error,
    },

    /// A record carries a value that breaks a dataset invariant
    #[error("invalid {entity} '{id}': {field} {reason}")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        field: &'static str,
        reason: String,
    },

    /// Query parameters are out of range or inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No exercise registered under the given key
    #[error("unknown exercise '{0}' (run `querylab list` to see available exercises)")]
    UnknownExercise(String),

    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Result could not be converted into a renderable value
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}
