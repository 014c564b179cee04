use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt;
use crate::models::Expense;
use crate::rollup::{self, YearRollup};

pub const NO_MONTH_MATCHES: &str = "No expenses found for this month.";
pub const NO_EXPENSES: &str = "No expenses to display.";

// ---------------------------------------------------------------------------
// Pure formatting functions (ledger / rollup data → String)
// ---------------------------------------------------------------------------

/// Tabular listing of one month's records ("MM-YYYY").
pub fn month_view(records: &[Expense], month: &str) -> Result<String> {
    let matching = rollup::records_for_month(records, month)?;
    if matching.is_empty() {
        return Ok(NO_MONTH_MATCHES.to_string());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Category", "Amount"]);
    for record in matching {
        table.add_row(vec![
            Cell::new(&record.date),
            Cell::new(&record.category),
            Cell::new(fmt::amount_cell(&record.amount)),
        ]);
    }
    Ok(format!("Expenses for {month}\n{table}"))
}

/// Flat annual summary. Every row repeats its year's annual total so the
/// table reads standalone row by row.
pub fn annual_summary(years: &[YearRollup]) -> String {
    if years.is_empty() {
        return NO_EXPENSES.to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Year", "Month", "Total", "Difference", "Annual Total"]);
    for year in years {
        for row in &year.months {
            let diff = if row.delta >= 0.0 {
                fmt::percent_label(row.delta).green().to_string()
            } else {
                fmt::percent_label(row.delta).red().to_string()
            };
            table.add_row(vec![
                Cell::new(year.year),
                Cell::new(row.key.label()),
                Cell::new(fmt::amount(row.total)),
                Cell::new(diff),
                Cell::new(fmt::amount(year.annual_total)),
            ]);
        }
    }
    format!("Annual Summary\n{table}")
}
