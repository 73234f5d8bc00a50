//! Error types for scaffolding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffold operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can occur during module generation.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid answers: {0}")]
    InvalidAnswers(String),

    #[error("Target directory already exists and is not empty: {0}")]
    AlreadyExists(PathBuf),

    #[error("Rendering failed: {0}")]
    RenderingFailed(String),

    #[error("Answer error: {0}")]
    Answer(#[from] tfmold_answers::AnswerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
