use std::collections::{HashMap, HashSet};
use std::path::Path;

use calamine::{Data, Range, Reader};
use chrono::NaiveDate;

use crate::error::{Result, TallyError};
use crate::models::{Amount, Expense, DATE_FORMAT};

// ---------------------------------------------------------------------------
// Cell parsing helpers
// ---------------------------------------------------------------------------

/// Textual date formats accepted on import, canonical storage format first.
const DATE_INPUT_FORMATS: &[&str] = &["%d-%m-%Y", "%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

pub fn parse_date_flexible(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
}

/// Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug).
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_signed(chrono::Duration::days(serial as i64))
}

fn cell_to_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::String(s) => parse_date_flexible(s),
        Data::Float(f) => excel_serial_to_date(*f),
        Data::Int(i) => excel_serial_to_date(*i as f64),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()),
        _ => None,
    }
}

fn cell_to_amount(cell: &Data) -> Amount {
    match cell {
        Data::Float(f) => Amount::Numeric(*f),
        Data::Int(i) => Amount::Numeric(*i as f64),
        Data::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => Amount::Numeric(v),
            Err(_) => Amount::Unparsed(s.clone()),
        },
        _ => Amount::Unparsed(String::new()),
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Workbook parsing
// ---------------------------------------------------------------------------

/// Column indices of the three required logical columns, located by exact
/// header name. Extra columns are ignored.
struct SheetSchema {
    date: usize,
    category: usize,
    amount: usize,
}

fn sheet_schema(header: &[Data]) -> Option<SheetSchema> {
    let mut cols: HashMap<&str, usize> = HashMap::new();
    for (idx, cell) in header.iter().enumerate() {
        if let Data::String(name) = cell {
            cols.entry(name.trim()).or_insert(idx);
        }
    }
    Some(SheetSchema {
        date: *cols.get("date")?,
        category: *cols.get("category")?,
        amount: *cols.get("amount")?,
    })
}

/// Parse every data sheet of a workbook into candidate records. Summary
/// sheets (name contains "Summary") and sheets missing a required column
/// are skipped whole; rows whose date cannot be parsed are dropped one by
/// one. Dates are re-serialized to the canonical format, so a candidate
/// record is always storable.
pub fn read_workbook(path: &Path) -> Result<Vec<Expense>> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| TallyError::WorkbookRead(e.to_string()))?;

    let mut candidates = Vec::new();
    for sheet_name in workbook.sheet_names().to_vec() {
        if sheet_name.contains("Summary") {
            continue;
        }
        let Ok(range) = workbook.worksheet_range(&sheet_name) else {
            continue;
        };
        read_sheet(&range, &mut candidates);
    }
    Ok(candidates)
}

fn read_sheet(range: &Range<Data>, out: &mut Vec<Expense>) {
    let mut rows = range.rows();
    let Some(schema) = rows.next().and_then(sheet_schema) else {
        return;
    };
    let needed = schema.date.max(schema.category).max(schema.amount) + 1;
    for row in rows {
        if row.len() < needed {
            continue;
        }
        let Some(date) = cell_to_date(&row[schema.date]) else {
            continue;
        };
        out.push(Expense {
            date: date.format(DATE_FORMAT).to_string(),
            category: cell_to_string(&row[schema.category]),
            amount: cell_to_amount(&row[schema.amount]),
        });
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

pub struct MergeOutcome {
    pub records: Vec<Expense>,
    pub added: usize,
    pub updated: usize,
}

/// Last-write-wins reconciliation. Existing and incoming records are laid
/// end to end and deduplicated on (date, category), keeping the final
/// occurrence of each key: an incoming record that collides with an
/// existing one replaces it at the incoming position, everything else keeps
/// its order.
pub fn merge(existing: Vec<Expense>, incoming: Vec<Expense>) -> MergeOutcome {
    let existing_len = existing.len();
    let existing_keys: HashSet<(String, String)> =
        existing.iter().map(Expense::dedup_key).collect();
    let combined: Vec<Expense> = existing.into_iter().chain(incoming).collect();

    let mut last_index: HashMap<(String, String), usize> = HashMap::new();
    for (idx, record) in combined.iter().enumerate() {
        last_index.insert(record.dedup_key(), idx);
    }

    let mut added = 0;
    let mut updated = 0;
    let mut records = Vec::with_capacity(combined.len());
    for (idx, record) in combined.into_iter().enumerate() {
        if last_index.get(&record.dedup_key()) != Some(&idx) {
            continue;
        }
        if idx >= existing_len {
            if existing_keys.contains(&record.dedup_key()) {
                updated += 1;
            } else {
                added += 1;
            }
        }
        records.push(record);
    }

    MergeOutcome {
        records,
        added,
        updated,
    }
}
