//! In-memory destination backend
//!
//! Holds tables in a mutex-guarded map and records every operation in a
//! journal, so tests can assert on ordering as well as final contents.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::traits::{Row, TableStore};

#[derive(Default)]
struct MemoryState {
    tables: HashMap<String, Vec<Row>>,
    journal: Vec<String>,
    reject_insert: Option<String>,
}

/// In-memory store used by driver tests
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make inserts into the named table fail, for error-path tests
    pub fn reject_insert_into(&self, table: &str) {
        self.state.lock().unwrap().reject_insert = Some(table.to_string());
    }

    /// Rows currently held for a table
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.state
            .lock()
            .unwrap()
            .tables
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Sequence of operations applied so far, e.g. `truncate Firm`,
    /// `insert Firm 12`
    pub fn journal(&self) -> Vec<String> {
        self.state.lock().unwrap().journal.clone()
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn truncate(&self, table: &str) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        state.tables.entry(table.to_string()).or_default().clear();
        state.journal.push(format!("truncate {table}"));
        Ok(())
    }

    async fn insert_rows(&self, table: &str, rows: &[Row]) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.reject_insert.as_deref() == Some(table) {
            return Err(StoreError::InsertRejected {
                table: table.to_string(),
                status: 500,
                body: "rejected by test".to_string(),
            });
        }
        state
            .tables
            .entry(table.to_string())
            .or_default()
            .extend(rows.iter().cloned());
        state.journal.push(format!("insert {table} {}", rows.len()));
        Ok(())
    }

    fn store_type(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn row(id: i64) -> Row {
        let mut row = Row::new();
        row.insert("Id".to_string(), Value::from(id));
        row
    }

    #[tokio::test]
    async fn test_truncate_then_insert() {
        let store = MemoryStore::new();
        store.insert_rows("Firm", &[row(1), row(2)]).await.unwrap();
        store.truncate("Firm").await.unwrap();
        store.insert_rows("Firm", &[row(3)]).await.unwrap();

        assert_eq!(store.rows("Firm").len(), 1);
        assert_eq!(
            store.journal(),
            vec!["insert Firm 2", "truncate Firm", "insert Firm 1"]
        );
    }

    #[tokio::test]
    async fn test_rejected_insert() {
        let store = MemoryStore::new();
        store.reject_insert_into("Firm");

        let err = store.insert_rows("Firm", &[row(1)]).await.unwrap_err();
        assert!(matches!(err, StoreError::InsertRejected { .. }));
        assert!(store.rows("Firm").is_empty());
    }
}
