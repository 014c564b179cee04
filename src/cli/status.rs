use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::fmt::format_bytes;
use crate::rollup;

pub fn run(ledger: Option<&Path>) -> Result<()> {
    let store = super::resolve_store(ledger);
    println!("Ledger: {}", store.path().display());

    if !store.path().exists() {
        println!();
        println!("{}", "Ledger not found. Run `tally init` to set up.".yellow());
        return Ok(());
    }

    let size = std::fs::metadata(store.path())?.len();
    println!("Size:   {}", format_bytes(size));

    let records = store.load()?;
    let years = rollup::rollup(&records)?;
    let month_count: usize = years.iter().map(|y| y.months.len()).sum();

    println!();
    println!("Records: {}", records.len());
    println!("Months:  {month_count}");
    println!("Years:   {}", years.len());
    Ok(())
}
