//! Flat table representation with a fixed destination schema
//!
//! A `Table` carries its destination name, its column list in destination
//! order, and its rows as positional values. The schema is attached at
//! construction and never derived from the data, so an empty table still
//! has the full column set.

use serde_json::{Map, Value};

/// A finalized flat table ready to be loaded into the destination store
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: &'static str,
    columns: &'static [&'static str],
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given destination schema
    pub fn new(name: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            name,
            columns,
            rows: Vec::new(),
        }
    }

    /// Append one row; values must be in column order
    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Destination table name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Column names in destination order
    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw positional rows
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Ordered column→value records for the destination store.
    ///
    /// Nulls are replaced by empty strings; the destination insert path has
    /// no native null representation.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(column, value)| {
                        let value = if value.is_null() {
                            Value::String(String::new())
                        } else {
                            value.clone()
                        };
                        ((*column).to_string(), value)
                    })
                    .collect()
            })
            .collect()
    }
}
