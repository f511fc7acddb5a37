//! tnt - command line access to the Transit & Trails API.
//!
//! Prints raw API responses, or GeoJSON Features for trailheads and trips,
//! as JSON on stdout.

mod cli;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tnt_core::{ClientConfig, TntClient};

use cli::{Cli, Command, ItemPart, TripPart};

/// Initialize the tracing subscriber for logging.
/// Logs go to stderr, or to `log_file` when given.
fn init_tracing(log_file: Option<&std::path::Path>) -> Result<Option<WorkerGuard>> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            Ok(None)
        }
    }
}

/// Resolve client settings: file and environment first, then flags.
fn client_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(ref base_url) = cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(ref key) = cli.api_key {
        config = config.with_api_key(key.clone());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

async fn run(cli: &Cli) -> Result<Value> {
    let client = TntClient::new(client_config(cli)?).context("Failed to create API client")?;

    let value = match &cli.command {
        Command::AttributeCategories(list) => client.get_attribute_categories(&list.query()).await?,

        Command::Campgrounds(list) => client.get_campgrounds(&list.query()).await?,
        Command::Campground { id, part } => match part {
            None => client.get_campground(*id).await?,
            Some(ItemPart::Attributes) => client.get_campground_attributes(Some(*id)).await?,
            Some(ItemPart::Maps) => client.get_campground_maps(*id).await?,
            Some(ItemPart::Photos) => client.get_campground_photos(*id).await?,
        },
        Command::CampgroundAttributes => client.get_campground_attributes(None).await?,

        Command::Trailheads(list) => client.get_trailheads(&list.query()).await?,
        Command::Trailhead { id, geojson: true, .. } => {
            serde_json::to_value(client.get_trailhead_as_geojson(*id).await?)?
        }
        Command::Trailhead { id, part, .. } => match part {
            None => client.get_trailhead(*id).await?,
            Some(ItemPart::Attributes) => client.get_trailhead_attributes(Some(*id)).await?,
            Some(ItemPart::Maps) => client.get_trailhead_maps(*id).await?,
            Some(ItemPart::Photos) => client.get_trailhead_photos(*id).await?,
        },
        Command::TrailheadAttributes => client.get_trailhead_attributes(None).await?,

        Command::Trips(list) => client.get_trips(&list.query()).await?,
        Command::Trip { id, geojson: true, .. } => {
            serde_json::to_value(client.get_trip_as_geojson(*id).await?)?
        }
        Command::Trip { id, part, .. } => match part {
            None => client.get_trip(*id).await?,
            Some(TripPart::Attributes) => client.get_trip_attributes(Some(*id)).await?,
            Some(TripPart::Maps) => client.get_trip_maps(*id).await?,
            Some(TripPart::Photos) => client.get_trip_photos(*id).await?,
            Some(TripPart::Route) => serde_json::to_value(client.get_trip_route(*id).await?)?,
        },
        Command::TripAttributes => client.get_trip_attributes(None).await?,

        Command::Users(list) => client.get_users(&list.query()).await?,
        Command::User { id } => client.get_user(*id).await?,
    };

    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let guard = init_tracing(cli.log_file.as_deref())?;
    info!("tnt starting");
    debug!(command = ?cli.command, "Parsed command line");

    let failed = match run(&cli).await.and_then(|value| render(&value, cli.compact)) {
        Ok(rendered) => {
            println!("{}", rendered);
            false
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            true
        }
    };

    // Flush buffered log lines before a non-zero exit skips destructors.
    drop(guard);
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn render(value: &Value, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}
