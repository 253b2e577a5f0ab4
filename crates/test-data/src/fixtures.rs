//! Input fixtures for the estimator's file readers.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use thiserror::Error;

use crate::gpx::{GpxLayout, generate_gpx};
use crate::sources::GeneratedRoute;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds a routing-engine response with one path: points as
/// `[lon, lat, ele]` and one instruction per route instruction.
pub fn routing_response(route: &GeneratedRoute) -> Value {
    let coordinates: Vec<[f64; 3]> = route
        .points
        .iter()
        .map(|p| [p.lon, p.lat, p.elevation])
        .collect();

    let instructions: Vec<Value> = route
        .instructions
        .iter()
        .map(|i| {
            let (from, to) = i.interval.unwrap_or((0, 0));
            json!({
                "distance": i.distance,
                "interval": [from, to],
                "text": i.text.as_deref().unwrap_or("Continue"),
            })
        })
        .collect();

    json!({
        "paths": [{
            "distance": route.total_distance(),
            "points_encoded": false,
            "points": { "type": "LineString", "coordinates": coordinates },
            "instructions": instructions,
        }]
    })
}

/// Writes a route fixture into `dir` and returns its path. The extension
/// selects the reader on load.
pub fn write_route(
    dir: &Path,
    name: &str,
    route: &GeneratedRoute,
    format: FixtureFormat,
) -> Result<PathBuf, FixtureError> {
    let (path, bytes) = match format {
        FixtureFormat::RoutingResponse => (
            dir.join(format!("{name}.json")),
            serde_json::to_vec_pretty(&routing_response(route))?,
        ),
        FixtureFormat::Gpx(layout) => (
            dir.join(format!("{name}.gpx")),
            generate_gpx(&route.points, name, layout),
        ),
    };
    std::fs::write(&path, bytes)?;
    tracing::debug!(path = %path.display(), "wrote route fixture");
    Ok(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    RoutingResponse,
    Gpx(GpxLayout),
}
