//! Error types for sra-core

use thiserror::Error;

/// Core error type for srasync
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Required environment variable missing
    #[error("[E001] Missing environment variable: {name}")]
    MissingEnv { name: String },

    /// E002: Payload is not an object with an `Organisations` array
    #[error("[E002] Unexpected payload shape: {message}")]
    BadPayload { message: String },

    /// E003: An organisation record failed to deserialize
    #[error("[E003] Malformed organisation record at index {index}: {message}")]
    BadRecord { index: usize, message: String },

    /// E004: Nested field neither a native list nor a parseable encoded list
    #[error("[E004] Organisation {id}: field '{field}' is not a list: {message}")]
    BadNestedField {
        id: i64,
        field: &'static str,
        message: String,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
