use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Textual date format used wherever a date is stored or displayed.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One ledger entry. Records carry no identifier: two records sharing date
/// and category are the same entry for merge purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: String,
    pub category: String,
    pub amount: Amount,
}

/// Amounts survive storage even when they are not numbers; only the
/// `Numeric` variant participates in sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Numeric(f64),
    Unparsed(String),
}

impl Amount {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Amount::Numeric(v) => Some(*v),
            Amount::Unparsed(_) => None,
        }
    }
}

impl Expense {
    /// Parse the stored date. Stored records are required to carry valid
    /// dates; anything else is a contract violation, not a row to skip.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| TallyError::MalformedRecordDate(self.date.clone()))
    }

    pub fn month_key(&self) -> Result<MonthKey> {
        Ok(MonthKey::from_date(self.parsed_date()?))
    }

    pub fn dedup_key(&self) -> (String, String) {
        (self.date.clone(), self.category.clone())
    }
}

/// Structured grouping key. Ordering is year-major and numeric, so rollups
/// come out in calendar order regardless of how the label would sort as a
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Zero-padded "MM-YYYY" display label.
    pub fn label(&self) -> String {
        format!("{:02}-{:04}", self.month, self.year)
    }

    /// Workbook sheet name for this month's records.
    pub fn sheet_name(&self) -> String {
        format!("{}_{}", self.year, self.label())
    }
}
