//! `list` command: catalog listing with pagination and search.

use std::path::PathBuf;

use clap::Args;
use tokio_util::sync::CancellationToken;

use hubzone::api::ListResponse;
use hubzone::service::{Outcome, PageQuery};

use crate::error::CliError;

use super::common;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Path to the zone dataset (JSON or JSON.gz)
    #[arg(long)]
    pub dataset: PathBuf,

    /// 1-indexed page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Page size (clamped to the service maximum)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Case-insensitive filter over name, state, and county
    #[arg(long)]
    pub search: Option<String>,
}

pub fn run(args: ListArgs) -> Result<(), CliError> {
    let service = common::build_service(&args.dataset, false)?;
    let token = CancellationToken::new();

    let query = PageQuery {
        page: args.page,
        limit: args.limit,
        search: args.search,
    };

    match service.find_all(&query, &token)? {
        Outcome::Complete(page) => {
            common::print_json(&ListResponse::from(page));
            Ok(())
        }
        Outcome::Cancelled => Err(CliError::Cancelled),
    }
}
