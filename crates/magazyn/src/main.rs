//! magazyn: interactive warehouse inventory tracker.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use magazyn::input::RustylineInput;
use magazyn::shell::Shell;
use magazyn_core::{Item, Warehouse};
use tracing_subscriber::EnvFilter;

/// Track stocked goods, record sales, and persist both to CSV or JSON.
#[derive(Parser, Debug)]
#[command(name = "magazyn")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Warehouse stock file
    #[arg(
        short = 'w',
        long = "warehouse",
        value_name = "PATH",
        default_value = "magazyn.csv"
    )]
    warehouse: PathBuf,

    /// Sales ledger file
    #[arg(
        short = 's',
        long = "sales",
        value_name = "PATH",
        default_value = "sprzedaz.csv"
    )]
    sales: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = match RustylineInput::new() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: failed to initialize the line editor: {err}");
            return ExitCode::from(1);
        }
    };

    let mut shell = Shell::new(
        Warehouse::new(),
        args.warehouse,
        args.sales,
        Box::new(input),
    );
    preload(&mut shell);
    shell.run();
    ExitCode::SUCCESS
}

/// Load the configured files that already exist. Missing files just mean
/// an empty start; a corrupt file is reported and skipped.
fn preload(shell: &mut Shell) {
    let warehouse_path = shell.warehouse_path.clone();
    let sales_path = shell.sales_path.clone();
    if let Some(items) = read_existing(shell, &warehouse_path) {
        shell.store.replace_items(items);
    }
    if let Some(sold) = read_existing(shell, &sales_path) {
        shell.store.replace_sold(sold);
    }
}

fn read_existing(shell: &Shell, path: &Path) -> Option<Vec<Item>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no existing file, starting empty");
        return None;
    }
    let loader = shell.loaders.detect(path)?;
    match loader.read(path) {
        Ok(items) => {
            tracing::info!(path = %path.display(), count = items.len(), "loaded collection");
            Some(items)
        }
        Err(err) => {
            eprintln!("error: {err}");
            None
        }
    }
}
