//! The `list` subcommand: prints one of the code lists USAJobs publishes.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use usajobs_api::{Client, CodeListEndpoint, CodeListQuery};

use crate::output::{print_code_list, OutputFormat};

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Code list to fetch (e.g. academic-honors, agency-subelements, postal-codes).
    /// Use --available to print every name.
    #[arg(required_unless_present = "available")]
    pub code_list: Option<CodeListEndpoint>,

    /// Show every column (list id, last modified, disabled, date generated)
    #[arg(long)]
    pub detail: bool,

    /// Only codes modified on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub last_modified: Option<NaiveDate>,

    /// Print the names of all available code lists and exit
    #[arg(long)]
    pub available: bool,
}

pub async fn run(args: &ListArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let Some(endpoint) = args.code_list else {
        for endpoint in CodeListEndpoint::ALL {
            println!("{}", endpoint);
        }
        return Ok(());
    };

    let query = args
        .last_modified
        .map(|date| CodeListQuery::default().with_last_modified(date));

    tracing::debug!("fetching {}", endpoint.path());
    let resp = client.code_list(endpoint, query.as_ref()).await?;
    if !resp.is_success() {
        bail!("bad response from usajobs: {}", resp.status_line());
    }

    print_code_list(&resp.data, args.detail, format)
}
