//! Factgrid CLI - render stored report payloads as UI-ready tables
//!
//! Usage:
//!   factgrid render <file.json> [--aggregates <csv>] [--lookups <csv>]
//!   factgrid columns <file.json> [--lookups <csv>]
//!
//! Examples:
//!   factgrid render fixtures/opportunities.json --aggregates "Record Count"
//!   factgrid columns fixtures/opportunities.json --lookups Owner

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use factgrid::prelude::*;
use factgrid::source::parse_response;
use factgrid::transform::build_columns;

#[derive(Parser)]
#[command(name = "factgrid")]
#[command(about = "Factgrid - render report execution results as UI-ready tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a stored report payload and print the table as JSON
    Render {
        /// Path to the stored report payload (.json)
        file: PathBuf,

        /// Comma-separated aggregate field names to extract
        #[arg(short, long, default_value = "")]
        aggregates: String,

        /// Comma-separated detail column keys to treat as lookups
        #[arg(short, long, default_value = "")]
        lookups: String,
    },

    /// Print the column specification a payload would produce
    Columns {
        /// Path to the stored report payload (.json)
        file: PathBuf,

        /// Comma-separated detail column keys to treat as lookups
        #[arg(short, long, default_value = "")]
        lookups: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Render {
            file,
            aggregates,
            lookups,
        } => render(&file, &aggregates, &lookups).await,
        Commands::Columns { file, lookups } => columns(&file, &lookups).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn render(file: &Path, aggregates: &str, lookups: &str) -> Result<()> {
    let result = load(file).await?;
    let request = TransformRequest::from_lists(aggregates, lookups);
    let table = transform(&result, &request);
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

async fn columns(file: &Path, lookups: &str) -> Result<()> {
    let result = load(file).await?;
    let request = TransformRequest::from_lists("", lookups);

    let grouped = !result.groupings_down.groupings.is_empty();
    let columns = build_columns(
        &result.report_extended_metadata,
        result.report_metadata.detail_columns.as_deref(),
        &request.lookups,
        grouped,
    );
    println!("{}", serde_json::to_string_pretty(&columns)?);
    Ok(())
}

async fn load(file: &Path) -> Result<ReportExecution> {
    let body = tokio::fs::read_to_string(file).await?;
    match parse_response(&body)? {
        FetchOutcome::Found(result) => Ok(*result),
        FetchOutcome::NotFound => Err(ReportError::NotFound),
    }
}
