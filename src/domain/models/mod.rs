pub mod expense;

pub use expense::{normalize_category, Expense};
