//! CLI tool for free-text place search via Nominatim.

use anyhow::Result;
use clap::Parser;
use detour_osrm::{NominatimClient, DEFAULT_NOMINATIM_URL};

/// Search for places matching a free-text query
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Free-text query (minimum 3 characters)
    query: String,

    /// Nominatim base URL
    #[arg(long, default_value = DEFAULT_NOMINATIM_URL)]
    nominatim_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = NominatimClient::new(args.nominatim_url);
    let results = client.search(&args.query).await;

    if results.is_empty() {
        eprintln!("No results");
    }
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
