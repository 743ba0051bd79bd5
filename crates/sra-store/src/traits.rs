//! Destination store trait definition

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StoreResult;

/// One destination row: ordered column→value pairs matching the table's
/// fixed schema
pub type Row = Map<String, Value>;

/// Destination store abstraction for srasync
///
/// Implementations must be Send + Sync for async operation. Truncate and
/// insert are deliberately separate steps; a failed insert after a
/// successful truncate leaves the table empty until the next run.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Remove every row from the named table
    async fn truncate(&self, table: &str) -> StoreResult<()>;

    /// Append rows to the named table
    async fn insert_rows(&self, table: &str, rows: &[Row]) -> StoreResult<()>;

    /// Store type identifier for logging
    fn store_type(&self) -> &'static str;
}
