// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point that loads the catalog and prints every card
// ═══════════════════════════════════════════════════════════════════════

use carto_deck::{Catalog, DEFAULT_CATALOG_PATH};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "carto-runner", about = "Print the Cartographers card catalog")]
struct Cli {
    /// Catalog file with "monsters" and "explore" decks
    #[arg(default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let catalog = match Catalog::load(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            // Always shown, whatever RUST_LOG says.
            eprintln!("Error loading catalog: {}", e);
            log::debug!("load failure detail: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_catalog(&mut io::stdout().lock(), &catalog) {
        eprintln!("Error writing catalog: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_catalog(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Deck size: {}", catalog.len())?;
    for card in catalog {
        writeln!(out, "\n---------\n\n{}", card)?;
    }
    Ok(())
}
