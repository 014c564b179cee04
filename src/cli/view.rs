use std::path::Path;

use crate::error::Result;
use crate::report;
use crate::rollup;

pub fn month(ledger: Option<&Path>, month: &str) -> Result<()> {
    let records = super::resolve_store(ledger).load()?;
    println!("{}", report::month_view(&records, month)?);
    Ok(())
}

pub fn summary(ledger: Option<&Path>) -> Result<()> {
    let records = super::resolve_store(ledger).load()?;
    let years = rollup::rollup(&records)?;
    println!("{}", report::annual_summary(&years));
    Ok(())
}
