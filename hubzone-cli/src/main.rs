//! HUBZone CLI - Command-line interface
//!
//! This binary exercises the hubzone library against a dataset file:
//! point-in-zone checks, catalog listing and search, zone detail lookup,
//! and dataset validation.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use error::CliError;

#[derive(Parser)]
#[command(name = "hubzone")]
#[command(about = "HUBZone spatial lookup engine", long_about = None)]
#[command(version = hubzone::VERSION)]
struct Cli {
    /// Also write logs to this directory (hubzone.log)
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check which zones contain a coordinate
    Check(commands::check::CheckArgs),
    /// List and search the zone catalog
    List(commands::list::ListArgs),
    /// Show one zone by id
    Show(commands::show::ShowArgs),
    /// Load a dataset and report validation results
    Validate(commands::validate::ValidateArgs),
}

fn main() {
    let cli = Cli::parse();

    let _guard = match &cli.log_dir {
        Some(dir) => match hubzone::logging::init_logging_with_file(dir, "hubzone.log") {
            Ok(guard) => guard,
            Err(e) => CliError::LoggingInit(e.to_string()).exit(),
        },
        None => hubzone::logging::init_logging(),
    };

    let result = match cli.command {
        Command::Check(args) => commands::check::run(args),
        Command::List(args) => commands::list::run(args),
        Command::Show(args) => commands::show::run(args),
        Command::Validate(args) => commands::validate::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
