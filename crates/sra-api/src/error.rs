//! Error types for sra-api

use thiserror::Error;

/// Errors raised while fetching the organisation snapshot
#[derive(Error, Debug)]
pub enum ApiError {
    /// A001: Network-level failure or undecodable response body
    #[error("[A001] Request to SRA Data Share failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A002: Non-success HTTP status
    #[error("[A002] SRA Data Share returned {status}: {body}")]
    Status { status: u16, body: String },

    /// A003: Response decoded but the payload shape is wrong
    #[error("[A003] {0}")]
    Payload(#[from] sra_core::CoreError),
}

/// Result type alias for ApiError
pub type ApiResult<T> = Result<T, ApiError>;
