//! Ledger CLI commands
//!
//! Non-interactive `add` and `view` commands, plus the range listing shared
//! with the interactive shell.

use std::io::{self, Write};

use chrono::NaiveDate;
use clap::Args;
use tracing::debug;

use super::prompt::{validate_amount, validate_category, validate_date};
use crate::chart::show_chart;
use crate::config::Settings;
use crate::display::{format_range_heading, format_record_table};
use crate::error::LedgerResult;
use crate::models::{Category, Record};
use crate::reports::{daily_series, totals};
use crate::storage::LedgerStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g. "9.60"), must be greater than zero
    pub amount: String,
    /// Category: "I"/"Income" or "E"/"Expense"
    pub category: String,
    /// Transaction date (dd/mm/yyyy), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
}

/// Arguments for `view`
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Start date (dd/mm/yyyy), inclusive
    #[arg(short, long)]
    pub start: String,
    /// End date (dd/mm/yyyy), inclusive
    #[arg(short, long)]
    pub end: String,
    /// Plot daily income and expenses after the listing
    #[arg(short, long)]
    pub chart: bool,
}

/// Handle `add`
pub fn handle_add_command(store: &LedgerStore, args: AddArgs) -> LedgerResult<()> {
    let date = match args.date.as_deref() {
        Some(value) => validate_date(value)?,
        None => chrono::Local::now().date_naive(),
    };
    let record = Record::new(
        date,
        validate_amount(&args.amount)?,
        validate_category(&args.category)?,
        args.description.trim(),
    );

    store.append(&record)?;
    println!("Entry added successfully!");
    Ok(())
}

/// Handle `view`
pub fn handle_view_command(
    store: &LedgerStore,
    settings: &Settings,
    args: ViewArgs,
) -> LedgerResult<()> {
    let start = validate_date(&args.start)?;
    let end = validate_date(&args.end)?;

    let records = {
        let mut stdout = io::stdout().lock();
        print_range(&mut stdout, store, settings, start, end)?
    };

    if args.chart && !records.is_empty() {
        plot_records(&records)?;
    }
    Ok(())
}

/// Print records in `[start, end]` with their summary
///
/// Returns the records so the caller can decide whether to chart them. An
/// empty range prints a notice and no summary.
pub fn print_range<W: Write>(
    out: &mut W,
    store: &LedgerStore,
    settings: &Settings,
    start: NaiveDate,
    end: NaiveDate,
) -> LedgerResult<Vec<Record>> {
    let records = store.query(start, end)?;

    if records.is_empty() {
        writeln!(out, "No transactions found in the given date range.")?;
        return Ok(records);
    }

    let summary = totals(&records)?;

    writeln!(out, "{}", format_range_heading(start, end))?;
    writeln!(
        out,
        "{}",
        format_record_table(&records, &settings.currency_symbol)
    )?;
    writeln!(out)?;
    write!(out, "{}", summary.format_terminal(&settings.currency_symbol))?;

    Ok(records)
}

/// Chart daily income and expenses of `records`
pub fn plot_records(records: &[Record]) -> LedgerResult<()> {
    let income = daily_series(records, &Category::Income)?.resampled();
    let expense = daily_series(records, &Category::Expense)?.resampled();
    debug!(days = income.len(), "rendering chart");
    show_chart(&income, &expense)
}
