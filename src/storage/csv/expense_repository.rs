//! CSV-based expense repository.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use rust_decimal::Decimal;
use tracing::debug;

use super::connection::CsvConnection;
use crate::domain::models::Expense;
use crate::domain::query_service;
use crate::error::{ExpenseError, Result};
use crate::storage::ExpenseStore;

/// Append-only store over the CSV expense log.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    connection: CsvConnection,
}

impl ExpenseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Decode one data row into an `Expense`, validating field count
    /// and field types. `line` is the 1-based data row number used in
    /// error reports.
    fn decode_row(record: &StringRecord, line: usize) -> Result<Expense> {
        if record.len() != 4 {
            return Err(ExpenseError::MalformedRow {
                line,
                fields: record.len(),
            });
        }
        let date = query_service::parse_date(record.get(0).unwrap_or(""))?;
        let category = record.get(1).unwrap_or("").to_string();
        let description = record.get(2).unwrap_or("").to_string();
        let raw_amount = record.get(3).unwrap_or("");
        let amount = raw_amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| ExpenseError::InvalidAmount(raw_amount.to_string()))?;

        // Stored categories were normalized at entry; keep them as-is.
        Ok(Expense {
            date,
            category,
            description,
            amount,
        })
    }
}

impl ExpenseStore for ExpenseRepository {
    fn ensure_initialized(&self) -> Result<()> {
        self.connection.ensure_initialized()
    }

    fn append(&self, expense: &Expense) -> Result<()> {
        self.connection.ensure_initialized()?;

        let file = OpenOptions::new()
            .append(true)
            .open(self.connection.path())?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));

        writer.write_record(&[
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.clone(),
            expense.description.clone(),
            format!("{:.2}", expense.amount),
        ])?;
        writer.flush()?;

        debug!(
            category = %expense.category,
            amount = %expense.amount,
            "appended expense"
        );
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Expense>> {
        self.connection.ensure_initialized()?;

        let file = File::open(self.connection.path())?;
        // Flexible so a short or long row reaches decode_row and comes
        // back as a typed MalformedRow instead of a generic CSV error.
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut expenses = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            expenses.push(Self::decode_row(&record, index + 1)?);
        }
        Ok(expenses)
    }
}
