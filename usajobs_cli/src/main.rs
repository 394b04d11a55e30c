mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use usajobs_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "usajobs")]
#[command(about = "An unofficial USAJobs CLI: search federal job announcements and browse code lists")]
#[command(
    long_about = "usajobs searches job openings announced on USAJobs through the public API. \
Searching requires an API token, requested at https://developer.usajobs.gov/apirequest/, \
and the email address it was issued to."
)]
struct Cli {
    /// Email address used when requesting the USAJobs API token
    #[arg(long, env = "USAJOBS_USER_AGENT", global = true, hide_env_values = true)]
    user_agent: Option<String>,

    /// USAJobs API token
    #[arg(long, env = "USAJOBS_API_KEY", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "USAJOBS_BASE_URL", global = true, hide = true)]
    base_url: Option<String>,

    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search job announcements
    Search(Box<commands::search::SearchArgs>),
    /// Print a code list (agencies, academic honors, postal codes, ...)
    List(commands::list::ListArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("usajobs=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    match &cli.command {
        Commands::Search(args) => {
            commands::search::run(args.as_ref(), &client, cli.output).await?
        }
        Commands::List(args) => commands::list::run(args, &client, cli.output).await?,
    }

    Ok(())
}

/// Builds the client from flags/environment. Every command needs both
/// credentials.
fn build_client(cli: &Cli) -> Result<Client> {
    let user_agent = cli.user_agent.as_deref().unwrap_or_default();
    let token = cli.token.as_deref().unwrap_or_default();

    let mut builder = Client::builder(user_agent, token);
    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url);
    }
    builder
        .build()
        .context("set --user-agent and --token (or USAJOBS_USER_AGENT and USAJOBS_API_KEY)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn every_command_requires_credentials() {
        let cli = Cli {
            user_agent: None,
            token: None,
            base_url: None,
            output: OutputFormat::Table,
            command: Commands::List(commands::list::ListArgs {
                code_list: None,
                detail: false,
                last_modified: None,
                available: true,
            }),
        };
        assert!(build_client(&cli).is_err());
    }

    #[test]
    fn flags_override_base_url() {
        let cli = parse(&[
            "usajobs",
            "--user-agent",
            "me@example.com",
            "--token",
            "abc",
            "--base-url",
            "http://127.0.0.1:8080",
            "list",
            "academic-honors",
        ]);
        let client = build_client(&cli).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn output_format_is_parsed() {
        let cli = parse(&["usajobs", "--output", "csv", "list", "postal-codes"]);
        assert_eq!(cli.output, OutputFormat::Csv);
        assert!(Cli::try_parse_from(["usajobs", "--output", "xml", "list", "postal-codes"]).is_err());
    }

    #[test]
    fn unknown_code_list_is_rejected() {
        assert!(Cli::try_parse_from(["usajobs", "list", "not-a-list"]).is_err());
    }
}
