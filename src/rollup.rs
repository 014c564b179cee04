use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{Expense, MonthKey};

// ---------------------------------------------------------------------------
// Rollup structures
// ---------------------------------------------------------------------------

/// One month's aggregated total plus its change versus the prior month of
/// the same year. `delta` is a fraction (1.0 == +100%); the first month of a
/// year, and any month following a zero total, carries 0.0.
#[derive(Debug)]
pub struct RollupRow {
    pub key: MonthKey,
    pub total: f64,
    pub delta: f64,
}

#[derive(Debug)]
pub struct YearRollup {
    pub year: i32,
    pub annual_total: f64,
    pub months: Vec<RollupRow>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Group records into per-month totals and per-year summaries. Records with
/// non-numeric amounts contribute nothing to the sums but still place their
/// month in the output. Years come back ascending, months in calendar order
/// within each year.
pub fn rollup(records: &[Expense]) -> Result<Vec<YearRollup>> {
    let mut totals: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for record in records {
        let key = record.month_key()?;
        *totals.entry(key).or_insert(0.0) += record.amount.as_numeric().unwrap_or(0.0);
    }

    let mut years: Vec<YearRollup> = Vec::new();
    for (key, total) in totals {
        match years.last_mut() {
            Some(year) if year.year == key.year => {
                let delta = match year.months.last() {
                    Some(prev) if prev.total != 0.0 => (total - prev.total) / prev.total,
                    _ => 0.0,
                };
                year.annual_total += total;
                year.months.push(RollupRow { key, total, delta });
            }
            _ => years.push(YearRollup {
                year: key.year,
                annual_total: total,
                months: vec![RollupRow { key, total, delta: 0.0 }],
            }),
        }
    }
    Ok(years)
}

/// Records whose date falls in the given "MM-YYYY" month, in ledger order.
pub fn records_for_month<'a>(records: &'a [Expense], month: &str) -> Result<Vec<&'a Expense>> {
    let mut matching = Vec::new();
    for record in records {
        if record.month_key()?.label() == month {
            matching.push(record);
        }
    }
    Ok(matching)
}
