//! Error type for drt-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrtError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Alias for `Result<T, DrtError>`.
pub type DrtResult<T> = Result<T, DrtError>;
