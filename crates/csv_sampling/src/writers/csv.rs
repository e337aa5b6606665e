use crate::dataset::TableDataset;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::path::PathBuf;

/// Writes a [`TableDataset`] to a CSV file: one header record followed by
/// every row, in the table's stored order.
///
/// The destination is created if absent and overwritten if present. No
/// row-index column is emitted; the output carries exactly the columns of
/// the table.
///
/// # Example
/// ```ignore
/// let written = CsvSink::new("sample.csv").write(&table)?;
/// ```
pub struct CsvSink {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSink {
    /// Creates a new writer for the given destination path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Sets the field delimiter (`,` by default).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Writes the table and returns the number of data rows written
    /// (excluding the header).
    pub fn write(&self, table: &TableDataset) -> Result<usize> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create output file: {}", self.path.display()))?;
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(file);

        writer
            .write_record(table.columns())
            .with_context(|| format!("Failed to write header to {}", self.path.display()))?;

        for row in table.iter() {
            writer
                .write_record(row)
                .with_context(|| format!("Failed to write row to {}", self.path.display()))?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        Ok(table.len())
    }
}
