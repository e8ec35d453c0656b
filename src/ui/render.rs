//! Presentation boundary: grid tables and horizontal bar charts.
//!
//! Everything here formats aggregated output into strings; nothing in
//! this module reads or writes the store.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::models::Expense;

const HEADERS: [&str; 4] = ["Date", "Category", "Description", "Amount"];
const MAX_BAR_WIDTH: usize = 40;

/// Render expenses as a bordered grid table. Amounts are
/// right-aligned with two decimal places.
pub fn table(expenses: &[Expense]) -> String {
    let rows: Vec<[String; 4]> = expenses
        .iter()
        .map(|e| {
            [
                e.date.format("%Y-%m-%d").to_string(),
                e.category.clone(),
                e.description.clone(),
                format!("{:.2}", e.amount),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border: String = {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+\n", segments.join("+"))
    };

    let mut out = String::new();
    out.push('\n');
    out.push_str(&border);
    out.push_str(&format_row(&HEADERS.map(String::from), &widths, false));
    out.push_str(&border);
    for row in &rows {
        out.push_str(&format_row(row, &widths, true));
    }
    out.push_str(&border);
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4], align_amount_right: bool) -> String {
    let mut line = String::from("|");
    for (index, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        let pad = width - cell.chars().count();
        if align_amount_right && index == 3 {
            line.push_str(&format!(" {}{} |", " ".repeat(pad), cell));
        } else {
            line.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
        }
    }
    line.push('\n');
    line
}

/// Render labeled totals as a horizontal bar chart, bars scaled to the
/// largest value. Non-positive totals get an empty bar.
pub fn bar_chart(title: &str, rows: &[(String, Decimal)]) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = rows
        .iter()
        .map(|(_, value)| *value)
        .max()
        .unwrap_or(Decimal::ZERO);

    let mut out = format!("\n{title}\n");
    for (label, value) in rows {
        let bar = "#".repeat(bar_length(*value, max_value));
        out.push_str(&format!(
            "{:<lw$}  {:<bw$}  {:.2}\n",
            label,
            bar,
            value,
            lw = label_width,
            bw = MAX_BAR_WIDTH,
        ));
    }
    out
}

fn bar_length(value: Decimal, max_value: Decimal) -> usize {
    if value <= Decimal::ZERO || max_value <= Decimal::ZERO {
        return 0;
    }
    let ratio = (value / max_value).to_f64().unwrap_or(0.0);
    ((ratio * MAX_BAR_WIDTH as f64).round() as usize).clamp(1, MAX_BAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(d: &str, category: &str, description: &str, amount: &str) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
            category,
            description,
            amount.parse().unwrap(),
        )
    }

    #[test]
    fn test_table_contains_headers_and_formatted_amounts() {
        let rendered = table(&[expense("2024-05-01", "Food", "Lunch", "250")]);
        assert!(rendered.contains("| Date "));
        assert!(rendered.contains("| 2024-05-01 |"));
        assert!(rendered.contains("250.00"));
    }

    #[test]
    fn test_table_column_fits_widest_cell() {
        let rendered = table(&[expense(
            "2024-05-01",
            "Food",
            "A rather long description of lunch",
            "1.00",
        )]);
        assert!(rendered.contains("A rather long description of lunch"));
        // Every line of the grid has the same width.
        let widths: std::collections::HashSet<usize> = rendered
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().count())
            .collect();
        assert_eq!(widths.len(), 1);
    }

    #[test]
    fn test_bar_chart_scales_to_largest_value() {
        let rows = vec![
            ("Food".to_string(), Decimal::new(10000, 2)),
            ("Travel".to_string(), Decimal::new(5000, 2)),
        ];
        let rendered = bar_chart("Category-wise Spending", &rows);
        let food_bar = rendered
            .lines()
            .find(|l| l.starts_with("Food"))
            .unwrap()
            .matches('#')
            .count();
        let travel_bar = rendered
            .lines()
            .find(|l| l.starts_with("Travel"))
            .unwrap()
            .matches('#')
            .count();
        assert_eq!(food_bar, MAX_BAR_WIDTH);
        assert_eq!(travel_bar, MAX_BAR_WIDTH / 2);
    }

    #[test]
    fn test_bar_chart_zero_value_has_empty_bar() {
        let rows = vec![
            ("2024-05-01".to_string(), Decimal::new(500, 2)),
            ("2024-05-02".to_string(), Decimal::ZERO),
        ];
        let rendered = bar_chart("Daily Spending", &rows);
        let zero_line = rendered
            .lines()
            .find(|l| l.starts_with("2024-05-02"))
            .unwrap();
        assert_eq!(zero_line.matches('#').count(), 0);
        assert!(zero_line.ends_with("0.00"));
    }
}
