//! Pure aggregation over expense sequences.
//!
//! Groupings return ordered `(label, total)` pairs rather than hash
//! maps so the rendering order is deterministic: first-appearance
//! order for categories and months, the caller's fixed day order for
//! the daily trend.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::models::Expense;

/// Sum of all amounts; zero for an empty sequence.
pub fn total(records: &[Expense]) -> Decimal {
    records.iter().map(|e| e.amount).sum()
}

/// Per-category totals in first-appearance order.
pub fn totals_by_category(records: &[Expense]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for expense in records {
        match totals.iter_mut().find(|(label, _)| label == &expense.category) {
            Some((_, sum)) => *sum += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }
    totals
}

/// Per-month totals keyed "YYYY-MM", in first-appearance order.
pub fn totals_by_month(records: &[Expense]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for expense in records {
        let key = expense.month_key();
        match totals.iter_mut().find(|(label, _)| label == &key) {
            Some((_, sum)) => *sum += expense.amount,
            None => totals.push((key, expense.amount)),
        }
    }
    totals
}

/// Per-day totals over a fixed day domain. Every day in `days` is
/// present in the output, zero-filled when nothing was spent, so the
/// trend chart gets a gap-free x-axis.
pub fn totals_by_day(records: &[Expense], days: &[NaiveDate]) -> Vec<(NaiveDate, Decimal)> {
    days.iter()
        .map(|day| {
            let sum = records
                .iter()
                .filter(|e| e.date == *day)
                .map(|e| e.amount)
                .sum();
            (*day, sum)
        })
        .collect()
}

/// The `n` calendar days ending at `today`, in ascending order. Chart
/// x-axis domain for the daily trend.
pub fn trailing_days(today: NaiveDate, n: usize) -> Vec<NaiveDate> {
    (0..n as i64)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}
