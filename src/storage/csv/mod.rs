//! CSV-backed expense storage.
//!
//! The log is a single flat file with a fixed header row:
//!
//! ```csv
//! Date,Category,Description,Amount
//! 2024-05-01,Food,Lunch,250.00
//! ```
//!
//! Rows are appended one at a time and never rewritten. Fields
//! containing commas or quotes are quoted by the CSV layer; amounts
//! are serialized with two decimal places.

pub mod connection;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use expense_repository::ExpenseRepository;
