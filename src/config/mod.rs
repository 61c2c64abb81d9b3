//! Configuration module for ledger-cli
//!
//! This module provides configuration management including:
//! - Platform path resolution for the settings file and ledger
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
