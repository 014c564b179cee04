mod cli;
mod error;
mod exporter;
mod fmt;
mod importer;
mod models;
mod report;
mod rollup;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, ClearCommands, Commands};

fn main() {
    let cli = Cli::parse();
    let ledger = cli.ledger.as_deref();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            date,
            category,
            amount,
        } => cli::add::run(ledger, &date, &category, amount),
        Commands::Month { month } => cli::view::month(ledger, &month),
        Commands::Summary => cli::view::summary(ledger),
        Commands::Export { file } => cli::export::run(ledger, &file),
        Commands::Import { file } => cli::import::run(ledger, &file),
        Commands::Clear { command } => match command {
            ClearCommands::All => cli::clear::all(ledger),
            ClearCommands::Month { month } => cli::clear::month(ledger, &month),
            ClearCommands::Date { date } => cli::clear::date(ledger, &date),
        },
        Commands::Status => cli::status::run(ledger),
        Commands::Demo => cli::demo::run(ledger),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
