//! Run configuration resolved once at process start
//!
//! The three secrets (store URL, store key, API key) are provisioned by an
//! external mechanism and arrive as opaque environment variables. The
//! resulting struct is passed by reference into the fetch routine and the
//! load driver; there is no process-wide singleton.

use crate::error::{CoreError, CoreResult};

/// Credentials and endpoints for one pipeline run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the destination store
    pub store_url: String,

    /// Service key for the destination store
    pub store_key: String,

    /// Subscription key for the SRA Data Share API
    pub api_key: String,
}

impl Config {
    /// Resolve configuration from environment variables
    pub fn from_env() -> CoreResult<Self> {
        Ok(Self {
            store_url: require("SUPABASE_URL")?,
            store_key: require("SUPABASE_KEY")?,
            api_key: require("SRA_API_KEY")?,
        })
    }
}

fn require(name: &str) -> CoreResult<String> {
    std::env::var(name).map_err(|_| CoreError::MissingEnv {
        name: name.to_string(),
    })
}
