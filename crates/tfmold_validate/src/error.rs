//! Error types for the validation harness.

use thiserror::Error;

/// Result type alias for validation operations.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Errors that can occur while invoking terraform.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("Failed to spawn terraform: {0}")]
    Spawn(String),

    #[error("Command timed out after {seconds}s: {command}")]
    Timeout { command: String, seconds: u64 },
}
