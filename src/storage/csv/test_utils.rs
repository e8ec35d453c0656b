//! Test infrastructure for the CSV storage layer.
//!
//! Provides a temporary-directory environment that is cleaned up when
//! dropped, even if a test panics.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use super::connection::CsvConnection;
use super::expense_repository::ExpenseRepository;
use crate::error::Result;
use crate::storage::ExpenseStore;

/// A repository backed by a log file inside a temporary directory.
pub struct TestEnvironment {
    pub repository: ExpenseRepository,
    pub log_path: PathBuf,
    _temp_dir: TempDir, // keep alive until drop
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let log_path = temp_dir.path().join("expenses.csv");
        let repository = ExpenseRepository::new(CsvConnection::new(&log_path));
        repository.ensure_initialized()?;
        Ok(Self {
            repository,
            log_path,
            _temp_dir: temp_dir,
        })
    }

    /// Append raw CSV lines, bypassing the repository, to simulate a
    /// log damaged by hand-editing.
    pub fn write_raw_rows(&self, rows: &[&str]) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&self.log_path)?;
        for row in rows {
            writeln!(file, "{row}")?;
        }
        Ok(())
    }
}
