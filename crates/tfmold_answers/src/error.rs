//! Error types for answer sets.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for answer operations.
pub type AnswerResult<T> = Result<T, AnswerError>;

/// Errors that can occur while loading or validating answers.
#[derive(Error, Debug)]
pub enum AnswerError {
    #[error("Answer file not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported answer file format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid answers: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
