use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use restaurant_client::config::{Command, Config, SearchArgs};
use restaurant_client::helpers::table::render_rows;
use restaurant_client::{normalize_detail, normalize_search_results, PlacesClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    match &config.command {
        Command::Search(args) => search(config, args),
    }
}

fn search(config: &Config, args: &SearchArgs) -> anyhow::Result<()> {
    let params = args.params();
    // Arguments are checked before the API key is resolved.
    params.validate().context("Invalid format")?;

    let client = PlacesClient::new(config.client_config())
        .context("Failed to set up the places client")?;

    let payload = client.search(&params).context("Search request failed")?;
    let rows = normalize_search_results(&payload);
    info!("Search for {:?} near {:?} returned {} places", params.query, params.near, rows.len());

    if !args.details {
        println!("{}", render_rows(&rows, args.format, args.max_rows)?);
        return Ok(());
    }

    let mut details = Vec::with_capacity(rows.len());
    for place_id in rows.iter().filter_map(|row| row.fsq_place_id.as_deref()) {
        info!("Fetching details for place {}", place_id);
        let payload = client
            .get_details(place_id)
            .with_context(|| format!("Detail lookup failed for place {}", place_id))?;
        details.push(normalize_detail(&payload));
    }

    println!("{}", render_rows(&details, args.format, args.max_rows)?);
    Ok(())
}
