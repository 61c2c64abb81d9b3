//! Reports module for ledger-cli
//!
//! Aggregates a filtered record set into totals and per-day series.

pub mod daily;
pub mod summary;

pub use daily::{daily_series, DailySeries};
pub use summary::{totals, Totals};
