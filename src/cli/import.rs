use std::path::Path;

use crate::error::Result;
use crate::importer;

pub fn run(ledger: Option<&Path>, file: &str) -> Result<()> {
    let store = super::resolve_store(ledger);

    // The whole workbook is parsed before the store is touched: a failure
    // here leaves the ledger exactly as it was.
    let incoming = importer::read_workbook(Path::new(file))?;
    if incoming.is_empty() {
        println!("No importable rows found; ledger unchanged.");
        return Ok(());
    }

    let existing = store.load()?;
    let outcome = importer::merge(existing, incoming);
    store.replace(&outcome.records)?;

    println!(
        "{} imported ({} new, {} updated)",
        outcome.added + outcome.updated,
        outcome.added,
        outcome.updated
    );
    Ok(())
}
