//! `show` command: single zone detail by id.

use std::path::PathBuf;

use clap::Args;

use hubzone::api::ZoneDetail;

use crate::error::CliError;

use super::common;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Path to the zone dataset (JSON or JSON.gz)
    #[arg(long)]
    pub dataset: PathBuf,

    /// Zone id to show
    pub id: String,

    /// Omit boundary geometry from the output
    #[arg(long)]
    pub no_boundary: bool,
}

pub fn run(args: ShowArgs) -> Result<(), CliError> {
    let service = common::build_service(&args.dataset, false)?;
    let record = service.find_by_id(&args.id)?;
    common::print_json(&ZoneDetail::from_record(&record, !args.no_boundary));
    Ok(())
}
