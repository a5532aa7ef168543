//! `check` command: which zones contain a coordinate.

use std::path::PathBuf;

use clap::Args;
use tokio_util::sync::CancellationToken;

use hubzone::api::CheckResponse;
use hubzone::service::Outcome;

use crate::error::CliError;

use super::common;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the zone dataset (JSON or JSON.gz)
    #[arg(long)]
    pub dataset: PathBuf,

    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Match only active, unexpired zones
    #[arg(long)]
    pub active_only: bool,

    /// Include boundary geometry in the output
    #[arg(long)]
    pub boundary: bool,
}

pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let service = common::build_service(&args.dataset, args.active_only)?;
    let token = CancellationToken::new();

    match service.check_location(args.lat, args.lon, &token)? {
        Outcome::Complete(check) => {
            common::print_json(&CheckResponse::from_check(&check, args.boundary));
            Ok(())
        }
        Outcome::Cancelled => Err(CliError::Cancelled),
    }
}
