use thiserror::Error;

/// Error taxonomy for the mock API layer.
///
/// `Transient` is reserved for a real network integration; the in-memory
/// backend never produces it, but the cache retry loop already handles it so
/// swapping in an HTTP client changes nothing upstream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Transient failure: {0}")]
    Transient(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}
