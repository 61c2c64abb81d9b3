//! Record display formatting
//!
//! Renders query results as a terminal table.

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{format_date, Record};

/// Longest description shown before truncation
const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct RecordLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format records as a table, in the order given
pub fn format_record_table(records: &[Record], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No transactions found.".to_string();
    }

    let lines = records.iter().map(|r| RecordLine {
        date: format_date(r.date),
        amount: r.amount.format_with_symbol(currency_symbol),
        category: r.category.to_string(),
        description: truncate(&r.description, DESCRIPTION_WIDTH),
    });

    let mut table = Table::new(lines);
    table
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right());
    table.to_string()
}

/// Heading printed above a date-range listing
pub fn format_range_heading(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "Transactions from {} to {}",
        format_date(start),
        format_date(end)
    )
}
