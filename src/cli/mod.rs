//! CLI command handlers
//!
//! This module bridges clap argument parsing and the interactive shell with
//! the ledger store and reports.

pub mod prompt;
pub mod record;
pub mod shell;

pub use prompt::Prompter;
pub use record::{handle_add_command, handle_view_command, AddArgs, ViewArgs};
pub use shell::Shell;
