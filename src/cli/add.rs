use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Result, TallyError};
use crate::fmt;
use crate::models::{Amount, Expense, DATE_FORMAT};

pub fn run(ledger: Option<&Path>, date: &str, category: &str, amount: f64) -> Result<()> {
    // Dates are validated here so nothing unparsable ever reaches storage.
    if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
        return Err(TallyError::InvalidDate(date.to_string()));
    }

    let store = super::resolve_store(ledger);
    store.append(Expense {
        date: date.to_string(),
        category: category.to_string(),
        amount: Amount::Numeric(amount),
    })?;

    println!("Added {category} expense of {} on {date}", fmt::amount(amount));
    Ok(())
}
