//! Path management for ledger-cli
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGER_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `ledger-cli`
//!    (`~/.config/ledger-cli` on Linux, `%APPDATA%\ledger-cli\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::settings::Settings;
use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "LEDGER_CLI_DATA_DIR";

/// Manages all paths used by ledger-cli
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for settings and the default ledger file
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger CSV named by the settings
    ///
    /// Absolute `ledger_file` settings are used as-is.
    pub fn ledger_file(&self, settings: &Settings) -> PathBuf {
        let configured = Path::new(&settings.ledger_file);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.base_dir.join(configured)
        }
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if ledger-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "ledger-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine home directory".into()))
}
