//! CSV ledger store
//!
//! Append-only persistence of records in a single CSV file with the fixed
//! header `date,amount,category,description`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Record, RecordRow, COLUMNS};

/// Store backed by one CSV file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the given file; nothing is touched on disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with only the header row if it does not exist yet
    ///
    /// An existing non-empty file is left untouched and is not validated. A
    /// zero-byte file is treated as missing.
    pub fn initialize(&self) -> LedgerResult<()> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() > 0 => return Ok(()),
            Ok(_) => debug!(path = %self.path.display(), "ledger file is empty, writing header"),
            Err(_) => self.create_parent_dir()?,
        }

        let file = File::create(&self.path).map_err(|e| self.io_error("create", e))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(COLUMNS)?;
        writer.flush().map_err(|e| self.io_error("write", e))?;

        debug!(path = %self.path.display(), "created ledger file");
        Ok(())
    }

    fn create_parent_dir(&self) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Append one record to the end of the file
    ///
    /// The file is initialized first if it is missing, so the header row is
    /// always present. No duplicate detection is done.
    pub fn append(&self, record: &Record) -> LedgerResult<()> {
        self.initialize()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(record.to_row())?;
        writer.flush().map_err(|e| self.io_error("write", e))?;

        info!(
            date = %record.date,
            amount = %record.amount,
            category = %record.category,
            "appended ledger entry"
        );
        Ok(())
    }

    /// Load every record in file order
    ///
    /// A missing or header-only file yields an empty list. Any row with a
    /// malformed date or amount fails the whole load.
    pub fn load_all(&self) -> LedgerResult<Vec<Record>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "ledger file absent, nothing to load");
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for result in reader.records() {
            let raw = result?;
            let line = raw.position().map(|p| p.line()).unwrap_or(0);
            let row: RecordRow = raw
                .deserialize(Some(&headers))
                .map_err(|e| LedgerError::parse(line, e.to_string()))?;
            records.push(Record::from_row(row, line)?);
        }

        Ok(records)
    }

    /// Records with `start <= date <= end`, in file order
    ///
    /// `start > end` is an ordinary empty range.
    pub fn query(&self, start: NaiveDate, end: NaiveDate) -> LedgerResult<Vec<Record>> {
        let records: Vec<Record> = self
            .load_all()?
            .into_iter()
            .filter(|r| r.date >= start && r.date <= end)
            .collect();

        debug!(%start, %end, matched = records.len(), "queried ledger");
        Ok(records)
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> LedgerError {
        LedgerError::Io(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}
