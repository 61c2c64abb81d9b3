//! Display formatting for terminal output
//!
//! Presentation of query results. Nothing here reads or writes the ledger.

pub mod record;
pub mod report;

pub use record::{format_range_heading, format_record_table};
pub use report::{format_header, separator, truncate};
