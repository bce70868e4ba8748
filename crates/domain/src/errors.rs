//! Domain error types.

use thiserror::Error;

/// Failure of a persistence backend.
///
/// The display text names only the operation; the driver error is kept as the
/// source for logging.
#[derive(Debug, Error)]
#[error("failed to {operation}")]
pub struct StorageError {
    operation: &'static str,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StorageError {
    pub fn new(
        operation: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Errors returned by the telemetry service to its callers.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Malformed input. Detected before any I/O is performed.
    #[error("{0}")]
    Validation(String),

    /// Authoritative write or read-path failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<validator::ValidationError> for TelemetryError {
    fn from(err: validator::ValidationError) -> Self {
        TelemetryError::Validation(shared::validation::message_of(&err))
    }
}
