use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Expense;

/// Flat ledger store: a single JSON array of records. The whole document is
/// read and rewritten on every operation, so derived views are always
/// computed from a fresh load and nothing can go stale.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or unreadable ledger file reads as empty. A file that is
    /// present but not valid JSON is an error: writing over it later would
    /// destroy whatever it still holds.
    pub fn load(&self) -> Result<Vec<Expense>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Ok(Vec::new()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Full rewrite of the ledger document.
    pub fn replace(&self, records: &[Expense]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, format!("{json}\n"))?;
        Ok(())
    }

    pub fn append(&self, record: Expense) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.replace(&records)
    }

    pub fn clear_all(&self) -> Result<()> {
        self.replace(&[])
    }

    /// Remove every record falling in the given "MM-YYYY" month. Returns how
    /// many were removed.
    pub fn clear_month(&self, month: &str) -> Result<usize> {
        let records = self.load()?;
        let mut kept = Vec::with_capacity(records.len());
        let mut removed = 0;
        for record in records {
            if record.month_key()?.label() == month {
                removed += 1;
            } else {
                kept.push(record);
            }
        }
        self.replace(&kept)?;
        Ok(removed)
    }

    /// Remove every record carrying the exact "DD-MM-YYYY" date.
    pub fn clear_date(&self, date: &str) -> Result<usize> {
        let records = self.load()?;
        let mut kept = Vec::with_capacity(records.len());
        let mut removed = 0;
        for record in records {
            if record.date == date {
                removed += 1;
            } else {
                kept.push(record);
            }
        }
        self.replace(&kept)?;
        Ok(removed)
    }
}
