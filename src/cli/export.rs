use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::exporter::{export_workbook, ExportStatus};

pub fn run(ledger: Option<&Path>, file: &str) -> Result<()> {
    let records = super::resolve_store(ledger).load()?;
    let path = PathBuf::from(file);

    match export_workbook(&records, &path)? {
        ExportStatus::NoData => println!("No data to save."),
        ExportStatus::Written => println!("Data saved to {}", path.display()),
    }
    Ok(())
}
