//! CLI entry point for the BCN arrivals dashboard pipeline.
//!
//! Provides subcommands for regenerating the dashboard from the live
//! aviationstack feed and for rebuilding it from a saved feed document.

mod infra;
mod services;

use crate::infra::aviationstack::AviationstackClient;
use crate::services::arrivals_api::ArrivalsApi;
use anyhow::{Context, Result};
use bcn_arrivals::{
    config::extras_or_default,
    fetch::{BasicClient, fetch_bytes},
    output::write_dashboard,
    parser::parse_batch,
    pipeline::build_dashboard,
    records::RawFlightRecord,
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bcn_arrivals")]
#[command(about = "Arrivals dashboard data pipeline for Barcelona airport", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the live arrivals feed and regenerate the dashboard JSON
    Update {
        /// Airport IATA code to query arrivals for
        #[arg(long, default_value = "BCN")]
        airport: String,

        /// File to write the dashboard document to
        #[arg(short, long, default_value = "public/data.json")]
        output: String,

        /// Optional JSON file overriding the auxiliary metrics block
        #[arg(long)]
        extras: Option<String>,
    },
    /// Rebuild the dashboard JSON from a saved feed file or URL
    Build {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// File to write the dashboard document to
        #[arg(short, long, default_value = "public/data.json")]
        output: String,

        /// Optional JSON file overriding the auxiliary metrics block
        #[arg(long)]
        extras: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bcn_arrivals.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bcn_arrivals.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Update {
            airport,
            output,
            extras,
        } => {
            let access_key = std::env::var("AVIATIONSTACK_API_KEY")
                .context("AVIATIONSTACK_API_KEY must be set")?;
            let client = AviationstackClient::new(access_key);

            info!(airport, "fetching live arrivals feed");
            let records = client.fetch_arrivals(&airport).await?;

            run_pipeline(records, &output, extras.as_deref())?;
        }
        Commands::Build {
            source,
            output,
            extras,
        } => {
            let bytes = fetcher(&source).await?;
            let records = parse_batch(&bytes)?;

            run_pipeline(records, &output, extras.as_deref())?;
        }
    }

    Ok(())
}

/// Runs the core pipeline over a parsed batch and persists the document.
fn run_pipeline(records: Vec<RawFlightRecord>, output: &str, extras: Option<&str>) -> Result<()> {
    let extras = extras_or_default(extras)?;
    let dashboard = build_dashboard(&records, Utc::now(), extras);

    write_dashboard(output, &dashboard)?;
    info!(
        output,
        total_vuelos = dashboard.meta.total_vuelos,
        "dashboard written"
    );

    Ok(())
}

/// Loads feed data from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %source))]
async fn fetcher(source: &String) -> Result<Vec<u8>> {
    let bytes = if source.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, source).await?
    } else {
        std::fs::read(source)?
    };
    Ok(bytes)
}
