use anyhow::{ensure, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::sync::Arc;

/// An in-memory table of delimited-text rows with named columns.
///
/// Rows are held in a contiguous, atomically reference-counted slice
/// (`Arc<[StringRecord]>`), so cloning a dataset only bumps the `Arc`
/// counter. Cell values are kept as the strings read from the source
/// file; the table never interprets them.
///
/// Ideal for datasets that comfortably fit into RAM.
#[derive(Debug, Clone)]
pub struct TableDataset {
    columns: StringRecord,
    rows: Arc<[StringRecord]>,
    metadata: HashMap<String, String>,
}

impl TableDataset {
    /// Creates a new table from a header record and a vector of rows.
    pub fn new(columns: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self {
            columns,
            rows: rows.into(),
            metadata: HashMap::new(),
        }
    }

    /// Adds/updates metadata and returns the modified dataset.
    /// Enables chaining: `table.with_metadata("source", "train.csv")`.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a metadata field, if it exists.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }

    /// The header record naming each column.
    pub fn columns(&self) -> &StringRecord {
        &self.columns
    }

    /// Returns the total number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Random-access lookup by row index.
    pub fn get(&self, index: usize) -> Option<&StringRecord> {
        self.rows.get(index)
    }

    /// Iterates over all rows in their stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, StringRecord> {
        self.rows.iter()
    }

    /// Materializes the rows at `indices` as a new table, preserving the
    /// header and metadata.
    ///
    /// Indices may repeat (sampling with replacement yields duplicates)
    /// but every index must be in bounds; a subset can only ever contain
    /// rows of the source table.
    pub fn select(&self, indices: &[usize]) -> Result<TableDataset> {
        let mut selected = Vec::with_capacity(indices.len());
        for &index in indices {
            ensure!(
                index < self.rows.len(),
                "Row index {} out of bounds for table with {} rows",
                index,
                self.rows.len()
            );
            selected.push(self.rows[index].clone());
        }
        Ok(Self {
            columns: self.columns.clone(),
            rows: selected.into(),
            metadata: self.metadata.clone(),
        })
    }
}
