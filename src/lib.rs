//! ledger-cli - Terminal-based personal income and expense ledger
//!
//! Records dated income and expense entries in a CSV file, lists them by
//! date range with totals, and charts daily income against expenses.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Records, categories and money amounts
//! - `storage`: Append-only CSV ledger store
//! - `reports`: Totals and daily series over a record set
//! - `display`: Terminal formatting of records and summaries
//! - `chart`: ratatui line chart of the daily series
//! - `cli`: Command handlers, input prompter and interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use ledger_cli::models::{parse_date, Category, Money, Record};
//! use ledger_cli::reports::totals;
//! use ledger_cli::storage::LedgerStore;
//!
//! # fn main() -> Result<(), ledger_cli::LedgerError> {
//! let store = LedgerStore::new("finance_data.csv");
//! store.initialize()?;
//! store.append(&Record::new(
//!     parse_date("13/03/2025").unwrap(),
//!     Money::from_cents(960),
//!     Category::Expense,
//!     "Food",
//! ))?;
//!
//! let march = store.query(parse_date("01/03/2025").unwrap(), parse_date("31/03/2025").unwrap())?;
//! println!("net: {}", totals(&march)?.net);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
