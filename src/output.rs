//! Result presentation and persistence.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Place;

/// Render one place as a multi-line console label.
pub fn format_place(place: &Place) -> String {
    let address = place.address().unwrap_or("N/A");
    let rating = match place.rating {
        Some(rating) => rating.to_string(),
        None => "N/A".to_string(),
    };
    let types = place
        .types
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n   Address: {}\n   Rating: {} ({} reviews)\n   Types: {}\n   Place ID: {}",
        place.name, address, rating, place.user_ratings_total, types, place.place_id
    )
}

/// Print the numbered result listing with a count footer.
pub fn print_results(places: &[Place], category: &str, county_label: &str) {
    println!(
        "\nFound {} results for \"{}\" in {}:\n",
        places.len(),
        category,
        county_label
    );
    println!("{}", "=".repeat(80));

    for (i, place) in places.iter().enumerate() {
        println!("\n{}. {}", i + 1, format_place(place));
    }

    println!("\n{}", "=".repeat(80));
    println!("\nTotal: {} places found", places.len());
}

/// Output file name derived from the run inputs.
pub fn results_filename(county: &str, category: &str) -> String {
    format!(
        "{}_{}_results.json",
        county.to_lowercase(),
        category.replace(' ', "_")
    )
}

/// Write the full result set as pretty-printed JSON, in one shot.
pub fn save_results<P: AsRef<Path>>(path: P, places: &[Place]) -> Result<()> {
    let json = serde_json::to_string_pretty(places).context("Failed to serialize results")?;
    fs::write(path.as_ref(), json)
        .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;

    info!("Results saved to {}", path.as_ref().display());
    Ok(())
}
