//! HTTP client for the SRA Data Share API

use log::debug;
use sra_core::{parse_organisations, Config, Organisation};

use crate::error::{ApiError, ApiResult};

const BASE_URL: &str = "https://sra-prod-apim.azure-api.net/datashare/api/V1";

/// Client for the SRA Data Share organisation endpoint
pub struct SraClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SraClient {
    /// Create a client for the production Data Share endpoint
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(BASE_URL, &config.api_key)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch the full organisation snapshot.
    ///
    /// The subscription key travels as a query parameter. A non-success
    /// status, a body that is not JSON, or a payload without the
    /// `Organisations` key all abort the run before any table is touched.
    pub async fn fetch_organisations(&self) -> ApiResult<Vec<Organisation>> {
        let url = format!("{}/organisation/GetAll", self.base_url);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("subscription-key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response.json().await?;
        let organisations = parse_organisations(payload)?;
        debug!("Fetched {} organisations", organisations.len());
        Ok(organisations)
    }
}
