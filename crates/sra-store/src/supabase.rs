//! Supabase (PostgREST) destination backend

use async_trait::async_trait;
use log::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::{Row, TableStore};

/// Supabase REST backend for the destination tables
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl SupabaseStore {
    /// Create a backend for the given project URL and service key
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
    }
}

#[async_trait]
impl TableStore for SupabaseStore {
    async fn truncate(&self, table: &str) -> StoreResult<()> {
        // PostgREST refuses an unfiltered DELETE. Every destination Id is
        // >= 1, so a not-equal filter on an impossible id clears the table.
        let response = self
            .authed(self.client.delete(self.table_url(table)))
            .query(&[("Id", "neq.0")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::TruncateRejected {
                table: table.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        debug!("Truncated {table}");
        Ok(())
    }

    async fn insert_rows(&self, table: &str, rows: &[Row]) -> StoreResult<()> {
        if rows.is_empty() {
            debug!("No rows for {table}, skipping insert");
            return Ok(());
        }

        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::InsertRejected {
                table: table.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        debug!("Inserted {} rows into {table}", rows.len());
        Ok(())
    }

    fn store_type(&self) -> &'static str {
        "supabase"
    }
}
