//! Domain model for a single expense record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One logged expense. Immutable once appended to the store; there is
/// no update or delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    /// Decimal so repeated aggregation stays drift-free. Negative
    /// values are accepted as entered.
    pub amount: Decimal,
}

impl Expense {
    /// Build a record, normalizing the category to title form so that
    /// entry and filtering agree on the label ("food" -> "Food").
    pub fn new(date: NaiveDate, category: &str, description: &str, amount: Decimal) -> Self {
        Self {
            date,
            category: normalize_category(category),
            description: description.trim().to_string(),
            amount,
        }
    }

    /// Calendar month key in "YYYY-MM" form, used for monthly grouping.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Title-case a category label: a letter is uppercased when the
/// previous character is not a letter, lowercased otherwise. Leading
/// and trailing whitespace is stripped.
///
/// This is the single normalization point used both when constructing
/// a record and when matching a category filter, so "food", "FOOD" and
/// "Food" all refer to the same category.
pub fn normalize_category(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alphabetic = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_normalize_category_title_cases() {
        assert_eq!(normalize_category("food"), "Food");
        assert_eq!(normalize_category("FOOD"), "Food");
        assert_eq!(normalize_category("  travel "), "Travel");
        assert_eq!(normalize_category("eating out"), "Eating Out");
        assert_eq!(normalize_category("e-food"), "E-Food");
        assert_eq!(normalize_category(""), "");
    }

    #[test]
    fn test_new_normalizes_category_and_trims_description() {
        let expense = Expense::new(
            date("2024-05-01"),
            "food",
            "  Lunch ",
            "250.00".parse().unwrap(),
        );
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn test_month_key() {
        let expense = Expense::new(date("2024-05-01"), "Food", "Lunch", Decimal::ZERO);
        assert_eq!(expense.month_key(), "2024-05");
    }

    #[test]
    fn test_negative_amount_is_accepted() {
        let expense = Expense::new(date("2024-05-01"), "Food", "Refund", "-5.00".parse().unwrap());
        assert!(expense.amount < Decimal::ZERO);
    }
}
