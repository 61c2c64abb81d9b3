//! Storage layer for ledger-cli
//!
//! Persists records to a single append-only CSV file.

pub mod ledger;

pub use ledger::LedgerStore;
