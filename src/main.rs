use anyhow::Result;
use tracing_subscriber::EnvFilter;

use expense_tracker::storage::{CsvConnection, ExpenseRepository};
use expense_tracker::ui::input::StdinInput;
use expense_tracker::ui::Session;

/// Expense log lives next to the working directory, like a notebook.
const FILE_NAME: &str = "expenses.csv";

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so logging never interleaves
    // with the interactive menu.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = ExpenseRepository::new(CsvConnection::new(FILE_NAME));
    let mut session = Session::new(store, StdinInput::new());
    session.run()
}
