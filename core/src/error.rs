// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Application error taxonomy for the storefront core.
///
/// Deliberately absent: backend unavailability and deep-link launch failure.
/// Those are modeled as outcome values (`BackendOutcome`, `HandoffOutcome`)
/// on the RFQ path, because neither is allowed to fail a submission.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Required: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// Cart blob write failure. Reads never produce this; they degrade to an
  /// empty list inside the store.
  #[error("Cart storage error: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Wraps any I/O or serialization cause as a storage error.
  pub fn storage(source: impl Into<AnyhowError>) -> Self {
    AppError::Storage { source: source.into() }
  }
}

// Convenience for call sites that bubble anyhow contexts out of helpers.
impl From<AnyhowError> for AppError {
  fn from(err: AnyhowError) -> Self {
    AppError::Internal(err.to_string())
  }
}

/// Result alias used throughout the crate.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
