//! Error taxonomy for the expense tracker.
//!
//! Storage and parse failures are surfaced as typed errors so the
//! session loop can report them for the current command and keep
//! running, instead of crashing on the first malformed row.

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExpenseError>;

#[derive(Debug, Error)]
pub enum ExpenseError {
    /// The expense log is unreadable or unwritable.
    #[error("expense log I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer failed to read or write a row.
    #[error("expense log format error: {0}")]
    Csv(#[from] csv::Error),

    /// A stored row does not have exactly the four expected fields.
    #[error("row {line} has {fields} fields, expected 4")]
    MalformedRow { line: usize, fields: usize },

    /// A date string is not a valid YYYY-MM-DD calendar date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A stored amount field does not parse as a decimal number.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    /// A date range filter was given a start date after its end date.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Interactively entered amount is not numeric. Never escapes the
    /// add flow, which retries in place.
    #[error("invalid amount '{0}'! Enter a number")]
    InvalidAmountInput(String),
}
