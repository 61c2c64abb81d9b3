//! Interactive menu shell
//!
//! Loops over a three-option menu until the user exits or input ends.

use std::io::{BufRead, Write};

use tracing::debug;

use super::prompt::Prompter;
use super::record::{plot_records, print_range};
use crate::config::Settings;
use crate::display::{format_header, separator};
use crate::error::LedgerResult;
use crate::models::Record;
use crate::storage::LedgerStore;

const MENU_WIDTH: usize = 52;

/// Menu-driven session over one ledger
pub struct Shell<'a, R, W> {
    store: &'a LedgerStore,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a LedgerStore, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until "Exit" is chosen or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompter.read_line_opt("Enter your choice (1-3): ")? else {
                writeln!(self.prompter.output())?;
                return Ok(());
            };

            debug!(choice = choice.trim(), "menu choice");
            match choice.trim() {
                "1" => self.add_transaction()?,
                "2" => self.view_transactions()?,
                "3" => {
                    writeln!(self.prompter.output(), "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.prompter.output(), "Invalid choice. Enter 1, 2 or 3.")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "{}", format_header("Personal Finance Ledger", MENU_WIDTH))?;
        writeln!(out, "{}", separator(MENU_WIDTH))?;
        writeln!(out, "1. Add a new transaction")?;
        writeln!(out, "2. View transactions and summary within a date range")?;
        writeln!(out, "3. Exit")?;
        Ok(())
    }

    fn add_transaction(&mut self) -> LedgerResult<()> {
        self.store.initialize()?;

        let date = self.prompter.date(
            "Enter the date of the transaction (dd/mm/yyyy) or enter for today's date: ",
            true,
        )?;
        let amount = self.prompter.amount()?;
        let category = self.prompter.category()?;
        let description = self.prompter.description()?;

        self.store
            .append(&Record::new(date, amount, category, description))?;
        writeln!(self.prompter.output(), "Entry added successfully!")?;
        Ok(())
    }

    fn view_transactions(&mut self) -> LedgerResult<()> {
        let start = self
            .prompter
            .date("Enter the start date (dd/mm/yyyy): ", false)?;
        let end = self
            .prompter
            .date("Enter the end date (dd/mm/yyyy): ", false)?;

        let records = print_range(self.prompter.output(), self.store, self.settings, start, end)?;
        if records.is_empty() {
            return Ok(());
        }

        if self.prompter.confirm("Do you want to see a plot? (y/n) ")? {
            plot_records(&records)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_shell(store: &LedgerStore, input: &str) -> String {
        let settings = Settings::default();
        let mut shell = Shell::new(
            store,
            &settings,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("finance_data.csv"));
        (temp_dir, store)
    }

    #[test]
    fn test_exit() {
        let (_temp_dir, store) = create_test_store();
        let out = run_shell(&store, "3\n");

        assert!(out.contains("1. Add a new transaction"));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_invalid_choice_loops() {
        let (_temp_dir, store) = create_test_store();
        let out = run_shell(&store, "9\nabc\n3\n");

        assert_eq!(out.matches("Invalid choice. Enter 1, 2 or 3.").count(), 2);
        assert_eq!(out.matches("3. Exit").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, store) = create_test_store();
        let out = run_shell(&store, "");
        assert!(out.contains("Enter your choice"));
    }

    #[test]
    fn test_add_transaction() {
        let (_temp_dir, store) = create_test_store();
        let out = run_shell(&store, "1\n01/01/2025\nabc\n100\nx\nI\nSalary\n3\n");

        assert!(out.contains("Entry added successfully!"));
        let records = store.load_all().unwrap();
        assert_eq!(
            records,
            vec![Record::new(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                Money::from_cents(10000),
                Category::Income,
                "Salary",
            )]
        );
    }

    #[test]
    fn test_view_transactions_without_plot() {
        let (_temp_dir, store) = create_test_store();
        let input = "1\n01/01/2025\n100\ni\nSalary\n\
                     1\n02/01/2025\n40\ne\nFood\n\
                     1\n02/01/2025\n10\nE\nBus\n\
                     2\n01/01/2025\n02/01/2025\nn\n\
                     3\n";
        let out = run_shell(&store, input);

        assert!(out.contains("Salary"));
        assert!(out.contains("Bus"));
        assert!(out.contains("Net Savings:   $50.00"));
        assert!(out.contains("Do you want to see a plot? (y/n)"));
    }

    #[test]
    fn test_view_empty_range_skips_plot_prompt() {
        let (_temp_dir, store) = create_test_store();
        let out = run_shell(&store, "2\n01/01/2030\n31/01/2030\n3\n");

        assert!(out.contains("No transactions found in the given date range."));
        assert!(!out.contains("Do you want to see a plot?"));
        assert!(out.contains("Exiting..."));
    }
}
