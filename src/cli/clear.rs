use std::path::Path;

pub fn all(ledger: Option<&Path>) -> crate::error::Result<()> {
    super::resolve_store(ledger).clear_all()?;
    println!("All expenses cleared.");
    Ok(())
}

pub fn month(ledger: Option<&Path>, month: &str) -> crate::error::Result<()> {
    let removed = super::resolve_store(ledger).clear_month(month)?;
    println!("Removed {removed} records for {month}.");
    Ok(())
}

pub fn date(ledger: Option<&Path>, date: &str) -> crate::error::Result<()> {
    let removed = super::resolve_store(ledger).clear_date(date)?;
    println!("Removed {removed} records for {date}.");
    Ok(())
}
