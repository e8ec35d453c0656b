//! Interactive session: the menu loop and command dispatch.
//!
//! The loop is an explicit `Session` object owning its store and input
//! collaborators; there is no global state. A command that fails on
//! bad data reports the error and returns to the menu, so one
//! malformed row never kills the session.

pub mod input;
pub mod render;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::{query_service, report_service};
use crate::error::ExpenseError;
use crate::storage::ExpenseStore;
use input::LineInput;

const MENU: &str = "\n===== EXPENSE TRACKER =====\n\
1. Add Expense\n\
2. View All Expenses\n\
3. Filter by Category\n\
4. Filter by Date / Range\n\
5. Show Total Spending\n\
6. Visualize Spending\n\
7. Exit";

pub struct Session<S: ExpenseStore, I: LineInput> {
    store: S,
    input: I,
    /// Fixed "today" for deterministic runs; `None` means the wall
    /// clock is consulted per command.
    today_override: Option<NaiveDate>,
}

impl<S: ExpenseStore, I: LineInput> Session<S, I> {
    pub fn new(store: S, input: I) -> Self {
        Self {
            store,
            input,
            today_override: None,
        }
    }

    /// Session with a fixed current date, for scripted runs and tests.
    pub fn with_today(store: S, input: I, today: NaiveDate) -> Self {
        Self {
            store,
            input,
            today_override: Some(today),
        }
    }

    fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run the menu loop until the user exits. Only input/output
    /// failures end the loop early; command errors are reported and
    /// the loop continues.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.store.ensure_initialized()?;
        loop {
            println!("{MENU}");
            let choice = self.input.prompt("Enter your choice (1-7): ")?;
            let outcome = match choice.trim() {
                "1" => self.add_expense(),
                "2" => self.view_all(),
                "3" => self.filter_by_category(),
                "4" => self.filter_by_date(),
                "5" => self.show_total(),
                "6" => self.visualize(),
                "7" => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
                other => {
                    println!("\nInvalid choice '{other}'! Please try again.");
                    Ok(())
                }
            };
            if let Err(err) = outcome {
                warn!(error = %err, "command failed");
                println!("\nError: {err}");
            }
        }
    }

    fn add_expense(&mut self) -> anyhow::Result<()> {
        let date = self.today();
        let category = self
            .input
            .prompt("Enter category (Food, Travel, Shopping, etc.): ")?;
        let description = self.input.prompt("Enter description: ")?;
        let amount = self.prompt_amount()?;

        let expense = crate::domain::models::Expense::new(date, &category, &description, amount);
        self.store.append(&expense)?;

        println!(
            "\nExpense added: {} - {:.2} on {}",
            expense.category, expense.amount, expense.date
        );
        Ok(())
    }

    /// Reprompt until the amount parses as a decimal number. Negative
    /// values are accepted as entered.
    fn prompt_amount(&mut self) -> anyhow::Result<Decimal> {
        loop {
            let raw = self.input.prompt("Enter amount: ")?;
            match raw.trim().parse::<Decimal>() {
                Ok(amount) => return Ok(amount),
                Err(_) => {
                    println!("{}", ExpenseError::InvalidAmountInput(raw.trim().to_string()));
                }
            }
        }
    }

    fn view_all(&mut self) -> anyhow::Result<()> {
        let expenses = self.store.read_all()?;
        if expenses.is_empty() {
            println!("\nNo expenses found!");
            return Ok(());
        }
        print!("{}", render::table(&expenses));
        println!("\nTotal Spending: {:.2}", report_service::total(&expenses));
        Ok(())
    }

    fn filter_by_category(&mut self) -> anyhow::Result<()> {
        let category = self.input.prompt("Enter category to filter: ")?;
        let expenses = self.store.read_all()?;
        let matching = query_service::by_category(&expenses, &category);
        if matching.is_empty() {
            println!(
                "\nNo expenses found for '{}'!",
                crate::domain::models::normalize_category(&category)
            );
            return Ok(());
        }
        print!("{}", render::table(&matching));
        println!("\nTotal Spending: {:.2}", report_service::total(&matching));
        Ok(())
    }

    fn filter_by_date(&mut self) -> anyhow::Result<()> {
        println!("\nFilter Options:");
        println!("1. Specific Date (YYYY-MM-DD)");
        println!("2. Last 7 Days");
        println!("3. Current Month");
        println!("4. Custom Range");
        let choice = self.input.prompt("Choose option (1-4): ")?;

        let expenses = self.store.read_all()?;
        let today = self.today();

        let filtered = match choice.trim() {
            "1" => {
                let raw = self.input.prompt("Enter date (YYYY-MM-DD): ")?;
                let date = query_service::parse_date(&raw)?;
                query_service::by_exact_date(&expenses, date)
            }
            "2" => query_service::by_last_n_days(
                &expenses,
                query_service::DEFAULT_WINDOW_DAYS,
                today,
            ),
            "3" => query_service::by_current_month(&expenses, today),
            "4" => {
                let start = query_service::parse_date(
                    &self.input.prompt("Enter start date (YYYY-MM-DD): ")?,
                )?;
                let end = query_service::parse_date(
                    &self.input.prompt("Enter end date (YYYY-MM-DD): ")?,
                )?;
                query_service::by_date_range(&expenses, start, end)?
            }
            other => {
                println!("\nInvalid choice '{other}'!");
                return Ok(());
            }
        };

        if filtered.is_empty() {
            println!("\nNo expenses found for this period!");
            return Ok(());
        }
        print!("{}", render::table(&filtered));
        println!("\nTotal Spending: {:.2}", report_service::total(&filtered));
        Ok(())
    }

    fn show_total(&mut self) -> anyhow::Result<()> {
        let expenses = self.store.read_all()?;
        if expenses.is_empty() {
            println!("\nNo expenses found!");
            return Ok(());
        }
        println!("\nTotal Spending: {:.2}", report_service::total(&expenses));
        Ok(())
    }

    fn visualize(&mut self) -> anyhow::Result<()> {
        let expenses = self.store.read_all()?;
        if expenses.is_empty() {
            println!("\nNo expenses found!");
            return Ok(());
        }

        println!("\nVisualization Options:");
        println!("1. Category-wise Spending");
        println!("2. Monthly Spending Trend");
        println!("3. Daily Trend (Last 7 Days)");
        let choice = self.input.prompt("Choose option (1-3): ")?;

        match choice.trim() {
            "1" => {
                let totals = report_service::totals_by_category(&expenses);
                print!("{}", render::bar_chart("Category-wise Spending", &totals));
            }
            "2" => {
                let totals = report_service::totals_by_month(&expenses);
                print!("{}", render::bar_chart("Monthly Spending Trend", &totals));
            }
            "3" => {
                let days = report_service::trailing_days(
                    self.today(),
                    query_service::DEFAULT_WINDOW_DAYS as usize,
                );
                let totals = report_service::totals_by_day(&expenses, &days);
                let labeled: Vec<(String, Decimal)> = totals
                    .into_iter()
                    .map(|(day, sum)| (day.format("%Y-%m-%d").to_string(), sum))
                    .collect();
                print!("{}", render::bar_chart("Daily Spending - Last 7 Days", &labeled));
            }
            other => println!("\nInvalid option '{other}'!"),
        }
        Ok(())
    }
}
