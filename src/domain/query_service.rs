//! Pure filter functions over an in-memory sequence of expenses.
//!
//! Every function here is a pure function of its inputs; `today` is
//! always passed in rather than read from the system clock, so the
//! window and month filters are deterministic under test.

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::models::{normalize_category, Expense};
use crate::error::{ExpenseError, Result};

/// Window used by the "last 7 days" filter and the daily trend chart.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Strict "YYYY-MM-DD" parsing for user-supplied date strings.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ExpenseError::InvalidDate(trimmed.to_string()))
}

/// Records whose normalized category matches `category` exactly.
/// Lowercase input matches title-cased stored labels.
pub fn by_category(records: &[Expense], category: &str) -> Vec<Expense> {
    let wanted = normalize_category(category);
    records
        .iter()
        .filter(|e| e.category == wanted)
        .cloned()
        .collect()
}

/// Records logged on exactly `date`.
pub fn by_exact_date(records: &[Expense], date: NaiveDate) -> Vec<Expense> {
    records.iter().filter(|e| e.date == date).cloned().collect()
}

/// Records inside the inclusive window `[today - n days, today]`.
pub fn by_last_n_days(records: &[Expense], n: i64, today: NaiveDate) -> Vec<Expense> {
    let start = today - Duration::days(n);
    records
        .iter()
        .filter(|e| start <= e.date && e.date <= today)
        .cloned()
        .collect()
}

/// Records whose date falls in the same calendar month and year as
/// `today`.
pub fn by_current_month(records: &[Expense], today: NaiveDate) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
        .cloned()
        .collect()
}

/// Records with `start <= date <= end`, both bounds inclusive. An
/// inverted range (start after end) is rejected rather than silently
/// yielding an empty result.
pub fn by_date_range(records: &[Expense], start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>> {
    if start > end {
        return Err(ExpenseError::InvalidRange { start, end });
    }
    Ok(records
        .iter()
        .filter(|e| start <= e.date && e.date <= end)
        .cloned()
        .collect())
}
