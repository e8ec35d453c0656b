//! Storage abstraction for the expense log.
//!
//! The trait keeps the session loop independent of the backing medium:
//! the interactive binary runs against the CSV repository, tests run
//! against an in-memory double.

pub mod csv;

pub use self::csv::{CsvConnection, ExpenseRepository};

use crate::domain::models::Expense;
use crate::error::Result;

/// Durable append-only collection of expense records.
pub trait ExpenseStore {
    /// Create the backing medium if it does not exist yet. Idempotent;
    /// called on every session start.
    fn ensure_initialized(&self) -> Result<()>;

    /// Persist one record after all existing content. Prior records
    /// are never rewritten.
    fn append(&self, expense: &Expense) -> Result<()>;

    /// All records in append order.
    fn read_all(&self) -> Result<Vec<Expense>>;
}
