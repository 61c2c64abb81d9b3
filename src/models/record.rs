//! Ledger record model
//!
//! A single dated income or expense entry, and its on-disk row form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Date format used for every date in the ledger file (`dd/mm/yyyy`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Column header of the ledger file, in order
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Parse a `dd/mm/yyyy` date
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Format a date as `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A single ledger transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: Category,
    pub description: String,
}

impl Record {
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Convert to the row written to disk
    pub fn to_row(&self) -> RecordRow {
        RecordRow {
            date: format_date(self.date),
            amount: self.amount.to_string(),
            category: self.category.as_str().to_string(),
            description: self.description.clone(),
        }
    }

    /// Build a record from a stored row
    ///
    /// `line` is only used to locate the failure in the error.
    pub fn from_row(row: RecordRow, line: u64) -> LedgerResult<Self> {
        let date = parse_date(&row.date).map_err(|e| {
            LedgerError::parse(line, format!("invalid date '{}': {}", row.date, e))
        })?;
        let amount = Money::parse(&row.amount)
            .map_err(|e| LedgerError::parse(line, e.to_string()))?;

        Ok(Self {
            date,
            amount,
            category: Category::from_stored(&row.category),
            description: row.description,
        })
    }
}

/// Raw row of the ledger file, field order matching [`COLUMNS`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}
