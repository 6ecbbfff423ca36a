//! Error types for Fein-AI Core

use thiserror::Error;

/// Main error type for Fein-AI operations.
///
/// The interactive surface never errors: empty submits and unknown topic ids
/// are silent no-ops. Only seed-data validation at construction can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid seed history: {0}")]
    InvalidHistory(String),

    #[error("Invalid seed greeting: {0}")]
    InvalidGreeting(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
