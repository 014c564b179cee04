use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};
use crate::store::Store;

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    std::fs::create_dir_all(&settings.data_dir)?;
    save_settings(&settings)?;

    let ledger = PathBuf::from(&settings.data_dir).join("ledger.json");
    if !ledger.exists() {
        Store::new(&ledger).replace(&[])?;
    }

    println!("Data dir: {}", settings.data_dir);
    println!("Ledger:   {}", ledger.display());
    Ok(())
}
