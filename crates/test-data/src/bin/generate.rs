//! Writes a synthetic route to stdout.
//!
//! Run with:
//! ```
//! ROUTE_REGION=sierra ROUTE_FORMAT=gpx cargo run -p test-data --bin generate > route.gpx
//! ```
//!
//! Environment: `ROUTE_SEED` (default 12345), `ROUTE_DISTANCE_M` (5000),
//! `ROUTE_REGION` (`sierra`, `foothills`, `lowlands`), `ROUTE_FORMAT`
//! (`json` or `gpx`).

use std::io::Write;

use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn env_or<T: std::str::FromStr>(var: &str, default: T) -> anyhow::Result<T> {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid {var}: {raw}")),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed: u64 = env_or("ROUTE_SEED", 12345)?;
    let distance: f64 = env_or("ROUTE_DISTANCE_M", 5000.0)?;
    let region = match env_or("ROUTE_REGION", "foothills".to_string())?.as_str() {
        "sierra" => Region::SIERRA,
        "foothills" => Region::FOOTHILLS,
        "lowlands" => Region::LOWLANDS,
        other => bail!("unknown region: {other}"),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let route = RouteGenerator::for_region(region, seed as u32)
        .with_distance(distance)
        .generate(&mut rng);

    let bytes = match env_or("ROUTE_FORMAT", "json".to_string())?.as_str() {
        "json" => serde_json::to_vec_pretty(&routing_response(&route))?,
        "gpx" => generate_gpx(&route.points, "Generated route", GpxLayout::Route),
        other => bail!("unknown format: {other}"),
    };

    std::io::stdout()
        .write_all(&bytes)
        .context("failed to write route")?;

    let estimate = estimate_path(&route.instructions, &TravelerProfile::default())?;
    tracing::info!("Route generated!");
    tracing::info!("  Points: {}", route.points.len());
    tracing::info!("  Instructions: {}", route.instructions.len());
    tracing::info!("  Distance: {:.0} m", route.total_distance());
    tracing::info!("  Reference traveler: {:.1} kcal", estimate.total_kcal);

    Ok(())
}
