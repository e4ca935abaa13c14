use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::client::{ClientConfig, SearchParams, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_LIMIT};
use crate::helpers::table::OutputFormat;

#[derive(Parser, Clone, Debug)]
#[clap(
    name = "restaurant-client",
    version,
    about = "Search restaurants using the Foursquare Places API and print them as a table."
)]
pub struct Config {
    #[clap(env = "FOURSQUARE_API_KEY", long, global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[clap(env = "FOURSQUARE_BASE_URL", long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[clap(env = "FOURSQUARE_API_VERSION", long, global = true, default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Seconds before a single request is abandoned
    #[clap(env = "FOURSQUARE_TIMEOUT_SECS", long, global = true, default_value_t = 20)]
    pub timeout_secs: u64,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Search for restaurants/places
    Search(SearchArgs),
}

#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// Search term, e.g. "ramen"
    #[clap(long)]
    pub query: String,

    /// Location string, e.g. "Atlanta, GA"
    #[clap(long)]
    pub near: String,

    /// Number of results (1-50)
    #[clap(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Radius in meters
    #[clap(long)]
    pub radius: Option<u32>,

    /// Comma-separated category ids
    #[clap(long)]
    pub categories: Option<String>,

    /// Fetch details for each place (rating, price, hours) and print those instead
    #[clap(long)]
    pub details: bool,

    /// Rows shown in the preview
    #[clap(long, default_value_t = 25)]
    pub max_rows: usize,

    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl Config {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl SearchArgs {
    pub fn params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            near: self.near.clone(),
            limit: self.limit,
            radius: self.radius,
            categories: self.categories.clone(),
        }
    }
}
