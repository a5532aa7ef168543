//! `validate` command: load a dataset and report what passed.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use hubzone::loader;

use crate::error::CliError;

use super::common;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the zone dataset (JSON or JSON.gz)
    #[arg(long)]
    pub dataset: PathBuf,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    accepted: usize,
    rejected: usize,
    antimeridian_zones: usize,
}

pub fn run(args: ValidateArgs) -> Result<(), CliError> {
    let dataset = loader::load_path(&args.dataset)?;

    let report = ValidationReport {
        accepted: dataset.stats.accepted,
        rejected: dataset.stats.rejected,
        antimeridian_zones: dataset
            .zones
            .iter()
            .filter(|z| z.crosses_antimeridian)
            .count(),
    };
    common::print_json(&report);
    Ok(())
}
