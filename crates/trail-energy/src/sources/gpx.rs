//! Instructions from GPX routes and tracks.

use std::io::Read;

use geo::{Distance as _, Haversine};
use gpx::{Gpx, Waypoint};

use crate::errors::SourceError;
use crate::models::Instruction;

/// Parses a GPX document and builds one instruction per leg.
///
/// Each route, or each track segment when the file has no routes, is
/// walked on its own: the gap between two segments never becomes a leg.
/// Intervals and error indices count points across the whole document.
pub fn instructions_from_gpx<R: Read>(reader: R) -> Result<Vec<Instruction>, SourceError> {
    let gpx = gpx::read(reader).map_err(|e| SourceError::Gpx(e.to_string()))?;

    let mut instructions = Vec::new();
    let mut offset = 0;
    for part in route_parts(&gpx) {
        instructions.extend(instructions_from_points(&part, offset)?);
        offset += part.len();
    }
    Ok(instructions)
}

/// Routes take precedence; a file without routes falls back to its track
/// segments.
fn route_parts(gpx: &Gpx) -> Vec<Vec<&Waypoint>> {
    if gpx.routes.iter().any(|r| !r.points.is_empty()) {
        return gpx
            .routes
            .iter()
            .map(|r| r.points.iter().collect())
            .collect();
    }

    gpx.tracks
        .iter()
        .flat_map(|t| t.segments.iter())
        .map(|s| s.points.iter().collect())
        .collect()
}

/// Every point but the last starts a leg to the next point. The last point
/// becomes a zero-length arrival instruction, so the final leg has a
/// successor to measure its elevation change against.
///
/// `offset` is the document-wide index of `points[0]`.
pub fn instructions_from_points(
    points: &[&Waypoint],
    offset: usize,
) -> Result<Vec<Instruction>, SourceError> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut instructions = Vec::with_capacity(points.len());
    for (i, wpt) in points.iter().enumerate() {
        let index = offset + i;
        let elevation = wpt.elevation.ok_or(SourceError::MissingElevation(index))?;
        let (distance, to) = match points.get(i + 1) {
            Some(next) => (Haversine.distance(wpt.point(), next.point()), index + 1),
            None => (0.0, index),
        };

        let mut instruction = Instruction::new(distance, elevation).with_interval(index, to);
        if let Some(name) = &wpt.name {
            instruction = instruction.with_text(name.clone());
        }
        instructions.push(instruction);
    }

    Ok(instructions)
}
