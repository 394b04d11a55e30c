use anyhow::Result;
use serde::Serialize;
use tabled::settings::object::Segment;
use tabled::settings::{Modify, Style, Width};
use tabled::{Table, Tabled};
use usajobs_api::types::{CodeListResponse, SearchResultItem};

/// Column width long code list cells wrap at in table output.
const WRAP_WIDTH: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "unknown output format '{}': expected table, json, csv, or markdown",
                s
            )),
        }
    }
}

#[derive(Tabled, Serialize)]
struct CodeRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct CodeDetailRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Last Modified")]
    #[serde(rename = "Last Modified")]
    last_modified: String,
    #[tabled(rename = "Disabled")]
    #[serde(rename = "Disabled")]
    is_disabled: String,
    #[tabled(rename = "Date Generated")]
    #[serde(rename = "Date Generated")]
    date_generated: String,
}

#[derive(Tabled, Serialize)]
struct JobRow {
    #[tabled(rename = "Position ID")]
    #[serde(rename = "Position ID")]
    position_id: String,
    #[tabled(rename = "Department")]
    #[serde(rename = "Department")]
    department: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Salary")]
    #[serde(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Closes")]
    #[serde(rename = "Closes")]
    closes: String,
}

// -- Row builders --

fn build_code_rows(resp: &CodeListResponse) -> Vec<CodeRow> {
    resp.values()
        .map(|(_, v)| CodeRow {
            code: v.code.clone(),
            value: v.value.clone(),
        })
        .collect()
}

fn build_code_detail_rows(resp: &CodeListResponse) -> Vec<CodeDetailRow> {
    resp.values()
        .map(|(id, v)| CodeDetailRow {
            id: id.to_string(),
            code: v.code.clone(),
            value: v.value.clone(),
            last_modified: v.last_modified.clone(),
            is_disabled: v.is_disabled.clone(),
            date_generated: resp.date_generated.clone(),
        })
        .collect()
}

fn build_job_rows(items: &[SearchResultItem]) -> Vec<JobRow> {
    items
        .iter()
        .map(|item| {
            let job = &item.matched_object_descriptor;
            JobRow {
                position_id: item.matched_object_id.clone(),
                department: job.department_name.clone(),
                title: job.position_title.clone(),
                location: job.position_location_display.clone(),
                salary: job.salary_range().unwrap_or_default(),
                closes: format_date(&job.application_close_date),
            }
        })
        .collect()
}

/// Trims an API timestamp (`2024-04-15T23:59:59.9970`) to its date.
fn format_date(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => timestamp.to_string(),
    }
}

fn render<R: Tabled>(rows: Vec<R>, format: OutputFormat) -> String {
    let mut table = Table::new(rows);
    match format {
        OutputFormat::Markdown => {
            table.with(Style::markdown());
        }
        _ => {
            table.with(Modify::new(Segment::all()).with(Width::wrap(WRAP_WIDTH)));
        }
    }
    table.to_string()
}

fn write_csv<R: Serialize>(rows: Vec<R>, out: impl std::io::Write) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Code lists --

pub fn print_code_list(resp: &CodeListResponse, detail: bool, format: OutputFormat) -> Result<()> {
    match (format, detail) {
        (OutputFormat::Json, _) => print_json(resp),
        (OutputFormat::Csv, true) => write_csv(build_code_detail_rows(resp), std::io::stdout())?,
        (OutputFormat::Csv, false) => write_csv(build_code_rows(resp), std::io::stdout())?,
        (_, true) => println!("{}", render(build_code_detail_rows(resp), format)),
        (_, false) => println!("{}", render(build_code_rows(resp), format)),
    }
    Ok(())
}

// -- Search results --

pub fn print_jobs(items: &[SearchResultItem], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&items),
        OutputFormat::Csv => write_csv(build_job_rows(items), std::io::stdout())?,
        OutputFormat::Table | OutputFormat::Markdown => {
            println!("{}", render(build_job_rows(items), format))
        }
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
