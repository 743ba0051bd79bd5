//! Error types for sra-store

use thiserror::Error;

/// Destination store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// S001: Transport-level failure
    #[error("[S001] Store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// S002: Delete-all rejected by the store
    #[error("[S002] Truncate of '{table}' rejected: {status} - {body}")]
    TruncateRejected {
        table: String,
        status: u16,
        body: String,
    },

    /// S003: Bulk insert rejected by the store
    #[error("[S003] Insert into '{table}' rejected: {status} - {body}")]
    InsertRejected {
        table: String,
        status: u16,
        body: String,
    },
}

/// Result type alias for StoreError
pub type StoreResult<T> = Result<T, StoreError>;
