//! County business search CLI.
//!
//! Geocodes a county, runs a text search for the requested category, falls
//! back to a nearby keyword search when the text results are thin, then
//! prints and saves the merged results.

use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use placescout::google::county_label;
use placescout::{merge, output, PlacesClient, SearchRequest};

#[derive(Parser, Debug)]
#[command(name = "placescout")]
#[command(about = "Find businesses of a given category within a US county")]
struct Args {
    /// County name, e.g. "Fulton"
    county: Option<String>,

    /// Business category, e.g. "gym" or "coffee shop"
    category: Option<String>,

    /// State containing the county
    #[arg(long, default_value = "Georgia")]
    state: String,

    /// Search radius in meters
    #[arg(long, default_value = "30000")]
    radius: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let county = match args.county {
        Some(county) => county.trim().to_string(),
        None => prompt("Enter county name (e.g. Fulton)")?,
    };
    let category = match args.category {
        Some(category) => category.trim().to_string(),
        None => prompt("Enter business category (e.g. gym, restaurant)")?,
    };
    if county.is_empty() || category.is_empty() {
        anyhow::bail!("County name and category are required");
    }

    let api_key = env::var("GOOGLE_MAPS_API_KEY").context(
        "GOOGLE_MAPS_API_KEY environment variable not set; \
         export your Google Maps API key before running",
    )?;

    let client = PlacesClient::new(api_key);
    let label = county_label(&county);

    info!("Finding location for {}, {}", label, args.state);
    let geocoded = client
        .geocode_county(&county, &args.state)
        .await
        .with_context(|| format!("Could not find {}, {}", label, args.state))?;

    info!("Found: {}", geocoded.formatted_address);
    info!(
        "Coordinates: {}, {}",
        geocoded.location.lat, geocoded.location.lng
    );

    info!("Searching for \"{}\" in {}", category, label);
    let request = SearchRequest::Text {
        query: format!("{} in {}, {}", category, label, args.state),
        location: geocoded.location,
        radius: args.radius,
    };
    let mut places = client.search(&request).await;

    if merge::needs_nearby_fallback(&places) {
        info!(
            "Only {} text search results, trying nearby search",
            places.len()
        );
        let request = SearchRequest::Nearby {
            keyword: category.clone(),
            location: geocoded.location,
            radius: args.radius,
        };
        let nearby = client.search(&request).await;
        places = merge::merge_unique(places, nearby);
    }

    output::print_results(&places, &category, &label);

    let filename = output::results_filename(&county, &category);
    output::save_results(&filename, &places)?;

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}
