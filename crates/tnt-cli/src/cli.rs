//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tnt_core::QueryParams;

#[derive(Parser, Debug)]
#[command(name = "tnt", version, about = "Query the Transit & Trails API")]
pub struct Cli {
    /// API key (overrides TNT_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URL (overrides TNT_URL_PREFIX)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List attribute categories
    AttributeCategories(ListArgs),

    /// List campgrounds
    Campgrounds(ListArgs),
    /// Show one campground, or one of its sub-resources
    Campground {
        id: u64,
        #[arg(value_enum)]
        part: Option<ItemPart>,
    },
    /// List every campground attribute
    CampgroundAttributes,

    /// List trailheads
    Trailheads(ListArgs),
    /// Show one trailhead, or one of its sub-resources
    Trailhead {
        id: u64,
        /// Emit a GeoJSON Point Feature with attributes merged in
        #[arg(long, conflicts_with = "part")]
        geojson: bool,
        #[arg(value_enum)]
        part: Option<ItemPart>,
    },
    /// List every trailhead attribute
    TrailheadAttributes,

    /// List trips
    Trips(ListArgs),
    /// Show one trip, or one of its sub-resources
    Trip {
        id: u64,
        /// Emit a GeoJSON LineString Feature with author and attributes merged in
        #[arg(long, conflicts_with = "part")]
        geojson: bool,
        #[arg(value_enum)]
        part: Option<TripPart>,
    },
    /// List every trip attribute
    TripAttributes,

    /// List users
    Users(ListArgs),
    /// Show one user
    User { id: u64 },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPart {
    Attributes,
    Maps,
    Photos,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripPart {
    Attributes,
    Maps,
    Photos,
    Route,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Query parameter as key=value; `key=` sends nothing for that key
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Option<String>)>,
}

impl ListArgs {
    pub fn query(&self) -> QueryParams {
        self.params.iter().cloned().collect()
    }
}

fn parse_param(raw: &str) -> Result<(String, Option<String>), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", raw))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in {:?}", raw));
    }
    let value = (!value.is_empty()).then(|| value.to_string());
    Ok((key.to_string(), value))
}
