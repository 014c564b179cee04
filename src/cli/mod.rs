pub mod add;
pub mod clear;
pub mod demo;
pub mod export;
pub mod import;
pub mod init;
pub mod status;
pub mod view;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::settings;
use crate::store::Store;

/// Resolve the ledger store: an explicit --ledger path wins, otherwise the
/// settings-configured data directory.
pub(crate) fn resolve_store(ledger: Option<&Path>) -> Store {
    match ledger {
        Some(path) => Store::new(path),
        None => Store::new(settings::ledger_path()),
    }
}

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Personal expense ledger with monthly rollups and Excel round-tripping."
)]
pub struct Cli {
    /// Ledger file to operate on (default: <data_dir>/ledger.json)
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up tally: choose a data directory and create an empty ledger.
    Init {
        /// Path for tally data (default: ~/Documents/tally)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record an expense.
    Add {
        /// Date: DD-MM-YYYY
        date: String,
        /// Free-form category label
        category: String,
        /// Amount spent
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// List one month's expenses.
    Month {
        /// Month: MM-YYYY
        month: String,
    },
    /// Annual summary: month totals with month-over-month change.
    Summary,
    /// Export the ledger to an .xlsx workbook.
    Export {
        /// Destination .xlsx path
        file: String,
    },
    /// Import an .xlsx workbook and merge it into the ledger.
    Import {
        /// Source .xlsx path
        file: String,
    },
    /// Remove records from the ledger.
    Clear {
        #[command(subcommand)]
        command: ClearCommands,
    },
    /// Show ledger location and summary statistics.
    Status,
    /// Load sample expenses to explore tally.
    Demo,
}

#[derive(Subcommand)]
pub enum ClearCommands {
    /// Remove every record.
    All,
    /// Remove all records for one month.
    Month {
        /// Month: MM-YYYY
        month: String,
    },
    /// Remove all records for one exact date.
    Date {
        /// Date: DD-MM-YYYY
        date: String,
    },
}
