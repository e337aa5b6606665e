//! Shared helpers for integration tests.

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a CSV file with an `id,value` header and `n` data rows, where
/// row `i` is `i,item_i`.
pub fn numbered_csv(n: usize) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "id,value")?;
    for i in 0..n {
        writeln!(file, "{},item_{}", i, i)?;
    }
    file.flush()?;
    Ok(file)
}

/// Reads a file back as its lines, in order.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(std::fs::read_to_string(path)?
        .lines()
        .map(|l| l.to_string())
        .collect())
}
