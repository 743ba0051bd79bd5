//! sra-api - SRA Data Share API client for srasync
//!
//! One GET against the organisation endpoint returns the full register
//! snapshot; everything else in the pipeline works from that.

pub mod client;
pub mod error;

pub use client::SraClient;
pub use error::{ApiError, ApiResult};
