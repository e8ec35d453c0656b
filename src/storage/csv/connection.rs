//! Backing-file handling for the CSV expense log.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use crate::error::Result;

/// Fixed header row, written exactly once at file creation.
pub const HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// Owns the path of the expense log file.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    path: PathBuf,
}

impl CsvConnection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log file with its header row if it does not exist.
    /// Safe to call on every startup.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        let mut writer = Writer::from_writer(BufWriter::new(file));
        writer.write_record(HEADER)?;
        writer.flush()?;
        info!(path = %self.path.display(), "created expense log");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_initialized_writes_header_once() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path().join("expenses.csv"));

        connection.ensure_initialized()?;
        let first = std::fs::read_to_string(connection.path())?;
        assert_eq!(first.trim(), "Date,Category,Description,Amount");

        // Second call must not touch the file.
        connection.ensure_initialized()?;
        let second = std::fs::read_to_string(connection.path())?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_ensure_initialized_creates_parent_directories() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path().join("nested/dir/expenses.csv"));
        connection.ensure_initialized()?;
        assert!(connection.path().exists());
        Ok(())
    }
}
