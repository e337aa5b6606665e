use crate::dataset::TableDataset;
use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::PathBuf;

/// A CSV file reader that supports both untyped (`StringRecord`) and
/// typed (`T: DeserializeOwned`) access to rows.
///
/// The reader runs strict: rows whose field count differs from the
/// header, or with broken quoting, are reported as errors carrying the
/// record position. There is no skip-bad-row mode.
///
/// # Examples
/// ## 1. Untyped streaming
/// ```ignore
/// let source = CsvSource::new("data.csv");
/// for record in source.stream()? {
///     let record = record?; // `csv::StringRecord`
/// }
/// ```
///
/// ## 2. Typed streaming (Rust structs)
/// ```ignore
/// #[derive(serde::Deserialize)]
/// struct Listing {
///     price: f64,
///     manufacturer: String,
/// }
///
/// let source = CsvSource::new("data.csv");
/// for listing in source.stream_typed::<Listing>()? {
///     let listing = listing?;
///     println!("Price: {}", listing.price);
/// }
/// ```
///
/// ## 3. Full load
/// ```ignore
/// let table = CsvSource::new("data.csv").load()?;
/// ```
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
    has_headers: bool,
}

impl CsvSource {
    /// Creates a new reader for a CSV file at the given path.
    ///
    /// # Arguments
    /// - `path`: Accepts `String`, `&str`, or `PathBuf`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
            has_headers: true,
        }
    }

    /// Sets the field delimiter (`,` by default).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the first record is a header row (`true` by default).
    /// Without headers, columns are named `column_0`, `column_1`, ...
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    fn open_reader(&self) -> Result<Reader<File>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open csv file: {}", self.path.display()))?;
        Ok(ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .from_reader(file))
    }

    /// Streams rows as `csv::StringRecord`, skipping the header record.
    ///
    /// # Errors
    /// - Fails if the file cannot be opened.
    /// - Yielded items fail on malformed records; the error names the
    ///   file and the record position.
    pub fn stream(&self) -> Result<Box<dyn Iterator<Item = Result<StringRecord>> + Send>> {
        let reader = self.open_reader()?;
        let path = self.path.clone();
        let iter = reader.into_records().map(move |record| {
            record.with_context(|| format!("Malformed CSV record in {}", path.display()))
        });
        Ok(Box::new(iter))
    }

    /// Streams rows as Rust types. Prefer this for type-safe workflows.
    ///
    /// # Type Parameter
    /// - `T`: Must implement `serde::Deserialize` (use `#[derive(Deserialize)]`).
    ///        Field names are matched against the header row.
    pub fn stream_typed<T: DeserializeOwned + Send + 'static>(
        &self,
    ) -> Result<Box<dyn Iterator<Item = Result<T>> + Send>> {
        let reader = self.open_reader()?;
        let path = self.path.clone();
        let iter = reader.into_deserialize::<T>().map(move |record| {
            record.with_context(|| format!("Malformed CSV record in {}", path.display()))
        });
        Ok(Box::new(iter))
    }

    /// Reads the header and every row into an in-memory [`TableDataset`].
    ///
    /// The whole file is materialized at once; memory scales with file
    /// size.
    pub fn load(&self) -> Result<TableDataset> {
        let mut reader = self.open_reader()?;

        let mut columns = if self.has_headers {
            reader
                .headers()
                .with_context(|| format!("Failed to read header of {}", self.path.display()))?
                .clone()
        } else {
            StringRecord::new()
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .with_context(|| format!("Malformed CSV record in {}", self.path.display()))?;
            rows.push(record);
        }

        // Synthesize column names from the first row's width when the
        // file carries no header.
        if !self.has_headers {
            let width = rows.first().map(|r| r.len()).unwrap_or(0);
            columns = (0..width).map(|i| format!("column_{}", i)).collect();
        }

        Ok(TableDataset::new(columns, rows)
            .with_metadata("source", self.path.display().to_string()))
    }
}
