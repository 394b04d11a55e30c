//! The `search` subcommand: searches job announcements with the full filter set.

use anyhow::{bail, Result};
use clap::Args;
use usajobs_api::{Client, SearchQuery, SearchSortDirection, WhoMayApply};

use crate::output::{print_jobs, OutputFormat};

/// Largest page the API serves.
const MAX_RESULTS_PER_PAGE: i64 = 500;

/// Arguments for the `search` subcommand.
///
/// List flags take comma-separated values, except `--location` where commas
/// already separate city from state.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Words used to refine the search (e.g. "Army Software Factory")
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,

    /// Filter by position title (e.g. "IT Specialist")
    #[arg(long)]
    pub title: Option<String>,

    /// Lower salary limit in dollars (e.g. 80000)
    #[arg(long)]
    pub min_salary: Option<i64>,

    /// Upper salary limit in dollars (e.g. 120000)
    #[arg(long)]
    pub max_salary: Option<i64>,

    /// Lower pay grade limit (e.g. 12)
    #[arg(long)]
    pub min_grade: Option<String>,

    /// Upper pay grade limit (e.g. 15)
    #[arg(long)]
    pub max_grade: Option<String>,

    /// Job category (occupational series) codes, comma-separated (e.g. 2210,0854)
    #[arg(long, short = 'j', value_delimiter = ',')]
    pub job_category: Vec<String>,

    /// Dash-separated list of City,State entries (e.g. Austin,Texas-Portland,Oregon)
    #[arg(long)]
    pub location: Option<String>,

    /// Organization codes, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub organization: Vec<String>,

    /// Position offering type codes, comma-separated (e.g. 15317)
    #[arg(long, value_delimiter = ',')]
    pub position_type: Vec<String>,

    /// Percent of travel required (e.g. 25)
    #[arg(long)]
    pub travel_rate: Option<i64>,

    /// Position schedule type codes, comma-separated (e.g. 1,6)
    #[arg(long, value_delimiter = ',')]
    pub schedule: Vec<i64>,

    /// Only show jobs that offer relocation assistance
    #[arg(long)]
    pub relocation: bool,

    /// Security clearance codes, comma-separated (e.g. 1,2,3)
    #[arg(long, value_delimiter = ',')]
    pub clearance: Vec<i64>,

    /// Supervisory status filter
    #[arg(long)]
    pub supervisory_status: Option<String>,

    /// Only jobs posted within this many days (0-60)
    #[arg(long)]
    pub date_posted: Option<i64>,

    /// Job grade codes, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub job_grade_code: Vec<i64>,

    /// Field to sort results by
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort order: asc or desc
    #[arg(long)]
    pub sort_direction: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page, 1-500; 0 or out-of-range values mean 500
    #[arg(long, default_value = "500")]
    pub num_results: i64,

    /// Who may apply: all, public, or status
    #[arg(long)]
    pub who_may_apply: Option<String>,

    /// Miles around --location to include
    #[arg(long)]
    pub radius: Option<i64>,

    /// Hiring path codes, comma-separated (e.g. public,vet)
    #[arg(long, value_delimiter = ',')]
    pub hiring_path: Vec<String>,

    /// Position sensitivity codes, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub position_sensitivity: Vec<i64>,

    /// Only show jobs that allow remote work
    #[arg(long)]
    pub remote: bool,
}

pub async fn run(args: &SearchArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    let resp = client.search(Some(&query)).await?;
    if !resp.is_success() {
        bail!("bad response from usajobs: {}", resp.status_line());
    }

    let result = &resp.data.search_result;
    if format != OutputFormat::Json {
        eprintln!(
            "Displaying {} of {} job announcements matching this search",
            result.search_result_count, result.search_result_count_all
        );
    }
    print_jobs(&result.search_result_items, format)
}

/// Translates CLI flags into a search query.
pub fn build_query(args: &SearchArgs) -> Result<SearchQuery> {
    let mut query = SearchQuery::default()
        .with_results_per_page(clamp_results_per_page(args.num_results))
        .with_job_category_codes(&args.job_category)
        .with_organizations(&args.organization)
        .with_position_offering_type_codes(&args.position_type)
        .with_position_schedule_type_codes(&args.schedule)
        .with_security_clearances(&args.clearance)
        .with_job_grade_codes(&args.job_grade_code)
        .with_hiring_paths(&args.hiring_path)
        .with_position_sensitivity(&args.position_sensitivity);

    if let Some(keyword) = &args.keyword {
        query = query.with_keyword(keyword);
    }
    if let Some(title) = &args.title {
        query = query.with_position_title(title);
    }
    if let Some(min) = args.min_salary {
        query = query.with_remuneration_minimum_amount(min);
    }
    if let Some(max) = args.max_salary {
        query = query.with_remuneration_maximum_amount(max);
    }
    if let (Some(min), Some(max)) = (args.min_salary, args.max_salary) {
        if min > max {
            bail!("--min-salary ({}) is greater than --max-salary ({})", min, max);
        }
    }
    if let Some(grade) = &args.min_grade {
        query = query.with_pay_grade_low(grade);
    }
    if let Some(grade) = &args.max_grade {
        query = query.with_pay_grade_high(grade);
    }
    if let Some(location) = &args.location {
        query = query.with_location_names(&split_locations(location));
    }
    if let Some(rate) = args.travel_rate {
        query = query.with_travel_percentage(rate);
    }
    if args.relocation {
        query = query.with_relocation_indicator(true);
    }
    if let Some(status) = &args.supervisory_status {
        query = query.with_supervisory_status(status);
    }
    if let Some(days) = args.date_posted {
        if !(0..=60).contains(&days) {
            bail!("--date-posted must be between 0 and 60, got {}", days);
        }
        query = query.with_date_posted(days);
    }
    if let Some(field) = &args.sort_by {
        query = query.with_sort_field(field);
    }
    if let Some(direction) = &args.sort_direction {
        let direction: SearchSortDirection = direction.parse().map_err(anyhow::Error::msg)?;
        query = query.with_sort_direction(direction);
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    if let Some(who) = &args.who_may_apply {
        let who: WhoMayApply = who.parse().map_err(anyhow::Error::msg)?;
        query = query.with_who_may_apply(who);
    }
    if let Some(radius) = args.radius {
        query = query.with_radius(radius);
    }
    if args.remote {
        query = query.with_remote_indicator(true);
    }

    Ok(query)
}

fn clamp_results_per_page(requested: i64) -> i64 {
    if (1..=MAX_RESULTS_PER_PAGE).contains(&requested) {
        requested
    } else {
        MAX_RESULTS_PER_PAGE
    }
}

fn split_locations(raw: &str) -> Vec<String> {
    raw.split('-')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
