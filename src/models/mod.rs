//! Core data models for ledger-cli

pub mod category;
pub mod money;
pub mod record;

pub use category::Category;
pub use money::{Money, MoneyParseError, MAX_UNITS};
pub use record::{format_date, parse_date, Record, RecordRow, COLUMNS, DATE_FORMAT};
