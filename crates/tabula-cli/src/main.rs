//! Tabula Command-Line Interface
//!
//! Loads tables into an in-memory registry, prints them, and optionally
//! exports each one as CSV.
//!
//! # Usage
//!
//! ```bash
//! # Print the built-in demo table
//! tabula
//!
//! # Load tables from a seed file and print them as JSON
//! tabula -s tables.toml -o json
//!
//! # Export every table to ./out/<table>.csv
//! tabula -s tables.toml --export-dir out
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tabula_db::{export_table_to_csv, Database};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod demo;
mod formatter;
mod seed;

use config::CliConfig;
use formatter::OutputFormat;
use seed::SeedFile;

/// Tabula command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "tabula",
    version,
    about = "Load, print, and export Tabula in-memory tables",
    long_about = "Builds an in-memory Tabula database from a TOML seed file (or the built-in\n\
                  league_data demo table), prints its tables, and optionally exports\n\
                  each table to CSV."
)]
struct Args {
    /// TOML seed file describing tables to load
    #[arg(short = 's', long, value_name = "FILE", env = "TABULA_SEED")]
    seed: Option<PathBuf>,

    /// Only print this table
    #[arg(short = 't', long)]
    table: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(short = 'o', long, value_enum)]
    output: Option<OutputFormatArg>,

    /// Write <table>.csv for every table into this directory
    #[arg(short = 'e', long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Slot width new tables start with
    #[arg(long, value_name = "N")]
    initial_capacity: Option<usize>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Do not print tables
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Output format argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    /// Schema line followed by one line per row
    Dump,
    /// Display tables in a bordered grid
    Table,
    /// Display rows as JSON objects
    Json,
    /// Display rows as CSV
    Csv,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Dump => OutputFormat::Dump,
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Csv => OutputFormat::Csv,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = load_config(&args)?;
    let format = match args.output {
        Some(arg) => arg.into(),
        None => match OutputFormat::from_name(&config.output_format) {
            Some(format) => format,
            None => bail!("unknown output format '{}'", config.output_format),
        },
    };

    let db = build_database(&config, args.seed.as_deref())?;

    if !args.quiet {
        print_tables(&db, args.table.as_deref(), format)?;
    }

    if let Some(dir) = &config.export_dir {
        export_all(&db, dir)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tabula=debug,tabula_db=debug,tabula_table=debug")
    } else {
        EnvFilter::new("tabula=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<CliConfig> {
    let mut config = if let Some(path) = &args.config {
        CliConfig::from_file(path)?
    } else {
        CliConfig::load_default()?
    };

    // Command line overrides the file
    if let Some(dir) = &args.export_dir {
        config.export_dir = Some(dir.clone());
    }
    if let Some(capacity) = args.initial_capacity {
        config.initial_capacity = capacity;
    }

    Ok(config)
}

fn build_database(config: &CliConfig, seed: Option<&Path>) -> Result<Database> {
    let mut db = Database::with_config(config.database_config())?;

    match seed {
        Some(path) => {
            info!("Loading seed file {}", path.display());
            SeedFile::from_file(path)?.load_into(&mut db)?;
        }
        None => {
            info!("No seed file given, loading demo table");
            demo::load_league_data(&mut db)?;
        }
    }

    Ok(db)
}

fn print_tables(db: &Database, only: Option<&str>, format: OutputFormat) -> Result<()> {
    if let Some(name) = only {
        let table = db.get_table(name)?;
        print!("{}", formatter::format_table(table, format)?);
        return Ok(());
    }

    for (name, table) in db.tables() {
        println!("Table: {}", name);
        println!("{}", formatter::format_table(table, format)?);
    }
    Ok(())
}

fn export_all(db: &Database, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    for (name, table) in db.tables() {
        let path = dir.join(format!("{}.csv", name));
        export_table_to_csv(table, &path)?;
        println!("Exported table to {}", path.display());
    }
    Ok(())
}
