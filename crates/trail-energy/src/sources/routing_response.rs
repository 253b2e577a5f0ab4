//! Instructions from a routing engine JSON response.
//!
//! Expects unencoded points with elevation:
//!
//! ```json
//! { "paths": [{
//!     "points": { "coordinates": [[lon, lat, ele], ...] },
//!     "instructions": [{ "distance": 12.5, "interval": [0, 3], "text": "Continue" }]
//! }] }
//! ```

use serde::Deserialize;

use crate::errors::SourceError;
use crate::models::Instruction;

#[derive(Debug, Deserialize)]
pub struct RoutingResponse {
    pub paths: Vec<RoutePath>,
}

#[derive(Debug, Deserialize)]
pub struct RoutePath {
    pub points: RoutePoints,
    pub instructions: Vec<RouteInstruction>,
}

#[derive(Debug, Deserialize)]
pub struct RoutePoints {
    /// `[lon, lat]` or `[lon, lat, elevation]`.
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct RouteInstruction {
    pub distance: f64,
    pub interval: (usize, usize),
    #[serde(default)]
    pub text: Option<String>,
}

/// Parses a response and converts its first path.
pub fn instructions_from_json(bytes: &[u8]) -> Result<Vec<Instruction>, SourceError> {
    let response: RoutingResponse = serde_json::from_slice(bytes)?;
    let path = response.paths.first().ok_or(SourceError::NoPath)?;
    instructions_from_path(path)
}

/// Each instruction starts at the point `interval.0`; its elevation is the
/// third coordinate of that point.
pub fn instructions_from_path(path: &RoutePath) -> Result<Vec<Instruction>, SourceError> {
    let coords = &path.points.coordinates;

    path.instructions
        .iter()
        .enumerate()
        .map(|(index, instr)| {
            let (from, to) = instr.interval;
            for point in [from, to] {
                if point >= coords.len() {
                    return Err(SourceError::IntervalOutOfRange {
                        index,
                        point,
                        len: coords.len(),
                    });
                }
            }

            let elevation = coords[from]
                .get(2)
                .copied()
                .ok_or(SourceError::MissingElevation(from))?;

            let mut instruction =
                Instruction::new(instr.distance, elevation).with_interval(from, to);
            if let Some(text) = &instr.text {
                instruction = instruction.with_text(text.clone());
            }
            Ok(instruction)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "paths": [{
            "distance": 350.0,
            "points": { "coordinates": [
                [-105.30, 40.000, 1650.4],
                [-105.30, 40.001, 1661.9],
                [-105.30, 40.002, 1655.0],
                [-105.30, 40.003, 1640.2]
            ]},
            "instructions": [
                { "distance": 111.2, "interval": [0, 1], "text": "Continue", "time": 80000, "sign": 0 },
                { "distance": 222.4, "interval": [1, 3], "text": "Turn left", "time": 160000, "sign": -2 },
                { "distance": 0.0, "interval": [3, 3], "text": "Arrive at destination", "time": 0, "sign": 4 }
            ]
        }]
    }"#;

    #[test]
    fn test_parse_response() {
        let instructions = instructions_from_json(RESPONSE.as_bytes()).unwrap();
        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0].distance, 111.2);
        assert_eq!(instructions[0].elevation_at_start, 1650.4);
        assert_eq!(instructions[1].elevation_at_start, 1661.9);
        assert_eq!(instructions[1].interval, Some((1, 3)));
        assert_eq!(instructions[2].text.as_deref(), Some("Arrive at destination"));
        assert_eq!(instructions[2].elevation_at_start, 1640.2);
    }

    #[test]
    fn test_no_paths() {
        let err = instructions_from_json(br#"{"paths": []}"#).unwrap_err();
        assert!(matches!(err, SourceError::NoPath));
    }

    #[test]
    fn test_missing_elevation() {
        let json = br#"{"paths": [{
            "points": {"coordinates": [[-105.3, 40.0], [-105.3, 40.001]]},
            "instructions": [{"distance": 111.2, "interval": [0, 1]}]
        }]}"#;
        let err = instructions_from_json(json).unwrap_err();
        assert!(matches!(err, SourceError::MissingElevation(0)));
    }

    #[test]
    fn test_interval_out_of_range() {
        let json = br#"{"paths": [{
            "points": {"coordinates": [[-105.3, 40.0, 1.0]]},
            "instructions": [{"distance": 111.2, "interval": [0, 4]}]
        }]}"#;
        let err = instructions_from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SourceError::IntervalOutOfRange {
                index: 0,
                point: 4,
                len: 1
            }
        ));
    }

    #[test]
    fn test_invalid_json() {
        let err = instructions_from_json(b"{").unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }
}
