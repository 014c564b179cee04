use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::Result;
use crate::fmt;
use crate::models::{Amount, Expense, MonthKey};
use crate::rollup;

pub const RECORD_HEADERS: [&str; 3] = ["date", "category", "amount"];
const SUMMARY_HEADERS: [&str; 4] = ["year", "month-year", "Total", "difference"];

const MIN_COLUMN_WIDTH: usize = 10;
const COLUMN_PADDING: usize = 2;

pub enum ExportStatus {
    Written,
    NoData,
}

// ---------------------------------------------------------------------------
// Column sizing
// ---------------------------------------------------------------------------

/// Widest cell seen per column. Widths are applied only after every row,
/// including the trailing total row, has been written — the total can be the
/// widest cell in its column.
struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    fn new(headers: &[&str]) -> Self {
        Self {
            widths: headers
                .iter()
                .map(|h| h.len().max(MIN_COLUMN_WIDTH))
                .collect(),
        }
    }

    fn note(&mut self, col: usize, text: &str) {
        if let Some(width) = self.widths.get_mut(col) {
            *width = (*width).max(text.chars().count());
        }
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<()> {
        for (col, width) in self.widths.iter().enumerate() {
            sheet.set_column_width(col as u16, (width + COLUMN_PADDING) as f64)?;
        }
        Ok(())
    }
}

fn put_string(
    sheet: &mut Worksheet,
    widths: &mut ColumnWidths,
    row: u32,
    col: usize,
    text: &str,
) -> Result<()> {
    sheet.write_string(row, col as u16, text)?;
    widths.note(col, text);
    Ok(())
}

fn put_number(
    sheet: &mut Worksheet,
    widths: &mut ColumnWidths,
    row: u32,
    col: usize,
    value: f64,
) -> Result<()> {
    sheet.write_number(row, col as u16, value)?;
    widths.note(col, &value.to_string());
    Ok(())
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Lay the ledger out as a workbook: one sheet per month with the raw
/// records and a trailing total row, then one summary sheet per year with
/// month totals, differences and the annual total. An empty ledger returns
/// `NoData` without touching the filesystem.
pub fn export_workbook(records: &[Expense], path: &Path) -> Result<ExportStatus> {
    if records.is_empty() {
        return Ok(ExportStatus::NoData);
    }

    let years = rollup::rollup(records)?;

    let mut groups: BTreeMap<MonthKey, Vec<&Expense>> = BTreeMap::new();
    for record in records {
        groups.entry(record.month_key()?).or_default().push(record);
    }

    let mut workbook = Workbook::new();
    for (key, group) in &groups {
        write_month_sheet(&mut workbook, key, group)?;
    }
    for year in &years {
        write_summary_sheet(&mut workbook, year)?;
    }

    save_scoped(&mut workbook, path)?;
    Ok(ExportStatus::Written)
}

fn write_month_sheet(workbook: &mut Workbook, key: &MonthKey, group: &[&Expense]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(key.sheet_name())?;

    let mut widths = ColumnWidths::new(&RECORD_HEADERS);
    for (col, header) in RECORD_HEADERS.iter().enumerate() {
        put_string(sheet, &mut widths, 0, col, header)?;
    }

    let mut total = 0.0;
    for (i, record) in group.iter().enumerate() {
        let row = (i + 1) as u32;
        put_string(sheet, &mut widths, row, 0, &record.date)?;
        put_string(sheet, &mut widths, row, 1, &record.category)?;
        match &record.amount {
            Amount::Numeric(v) => {
                put_number(sheet, &mut widths, row, 2, *v)?;
                total += v;
            }
            // Raw text goes out verbatim so the record survives a
            // round-trip through export and import.
            Amount::Unparsed(raw) => put_string(sheet, &mut widths, row, 2, raw)?,
        }
    }

    let total_row = (group.len() + 1) as u32;
    put_string(sheet, &mut widths, total_row, 0, "Total")?;
    put_number(sheet, &mut widths, total_row, 2, total)?;

    widths.apply(sheet)
}

fn write_summary_sheet(workbook: &mut Workbook, year: &rollup::YearRollup) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(format!("Summary {}", year.year))?;

    let mut widths = ColumnWidths::new(&SUMMARY_HEADERS);
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        put_string(sheet, &mut widths, 0, col, header)?;
    }

    for (i, row) in year.months.iter().enumerate() {
        let r = (i + 1) as u32;
        put_number(sheet, &mut widths, r, 0, year.year as f64)?;
        put_string(sheet, &mut widths, r, 1, &row.key.label())?;
        put_number(sheet, &mut widths, r, 2, row.total)?;
        put_string(sheet, &mut widths, r, 3, &fmt::percent_label(row.delta))?;
    }

    let total_row = (year.months.len() + 1) as u32;
    put_string(sheet, &mut widths, total_row, 0, "Total for the Year")?;
    put_number(sheet, &mut widths, total_row, 2, year.annual_total)?;

    widths.apply(sheet)
}

/// Write the workbook next to the destination and move it into place, so a
/// failed save never leaves a truncated file at the final path.
fn save_scoped(workbook: &mut Workbook, path: &Path) -> Result<()> {
    let tmp = path.with_extension("xlsx.tmp");
    if let Err(e) = workbook.save(&tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        e
    })?;
    Ok(())
}
