use thiserror::Error;

/// Errors that can occur when building structured data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructuredDataError {
    #[error("Invalid URL {path:?}: {reason}")]
    InvalidUrl { path: String, reason: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for structured data operations.
pub type Result<T> = std::result::Result<T, StructuredDataError>;
