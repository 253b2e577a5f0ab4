//! Text and JSON reports of a path estimate.

use std::fmt::Write as _;

use serde::Serialize;

use crate::models::Instruction;
use crate::path::{PathEstimate, SegmentEntry};

const METERS_PER_MILE: f64 = 1609.344;
const FEET_PER_METER: f64 = 3.28084;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

pub fn format_distance(meters: f64, units: Units) -> String {
    match units {
        Units::Metric if meters < 1000.0 => format!("{} m", meters.round() as i64),
        Units::Metric => format!("{:.2} km", meters / 1000.0),
        Units::Imperial if meters < METERS_PER_MILE * 0.1 => {
            format!("{} ft", (meters * FEET_PER_METER).round() as i64)
        }
        Units::Imperial => format!("{:.2} mi", meters / METERS_PER_MILE),
    }
}

pub fn format_duration(seconds: f64) -> String {
    let total = seconds.round() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours} h {minutes:02} min")
    } else if minutes > 0 {
        format!("{minutes} min")
    } else {
        format!("{secs} s")
    }
}

/// One line per estimated instruction followed by the path total.
pub fn render_text(instructions: &[Instruction], estimate: &PathEstimate, units: Units) -> String {
    let mut out = String::new();
    for entry in &estimate.segments {
        let Some(instruction) = instructions.get(entry.index) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<28} {:>10} {:>10} {:>8.0} m ASL {:>8.2} kcal {:>9.2} kcal",
            entry.index + 1,
            instruction.text.as_deref().unwrap_or("-"),
            format_distance(instruction.distance, units),
            format_duration(entry.result.time_seconds),
            instruction.elevation_at_start,
            entry.result.kcal,
            entry.cumulative_kcal,
        );
    }
    for failure in &estimate.failures {
        let _ = writeln!(out, "{:>4}  skipped: {}", failure.index + 1, failure.error);
    }
    let _ = writeln!(
        out,
        "total {} in {}: {:.2} kcal",
        format_distance(instructions.iter().map(|i| i.distance).sum(), units),
        format_duration(estimate.total_seconds),
        estimate.total_kcal
    );
    if !estimate.diagnostics.floor_substitutions.is_empty() {
        let _ = writeln!(
            out,
            "basal floor applied to {} segment(s)",
            estimate.diagnostics.floor_substitution_count()
        );
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonSegment<'a> {
    #[serde(flatten)]
    instruction: &'a Instruction,
    #[serde(flatten)]
    entry: &'a SegmentEntry,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    segments: Vec<JsonSegment<'a>>,
    total_kcal: f64,
    total_seconds: f64,
    failures: &'a [crate::path::SegmentFailure],
    diagnostics: &'a crate::diagnostics::Diagnostics,
}

pub fn render_json(
    instructions: &[Instruction],
    estimate: &PathEstimate,
) -> serde_json::Result<String> {
    let segments = estimate
        .segments
        .iter()
        .filter_map(|entry| {
            instructions
                .get(entry.index)
                .map(|instruction| JsonSegment { instruction, entry })
        })
        .collect();

    serde_json::to_string_pretty(&JsonReport {
        segments,
        total_kcal: estimate.total_kcal,
        total_seconds: estimate.total_seconds,
        failures: &estimate.failures,
        diagnostics: &estimate.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::estimate_path;
    use crate::profile::TravelerProfile;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0, Units::Metric), "0 m");
        assert_eq!(format_distance(999.4, Units::Metric), "999 m");
        assert_eq!(format_distance(1234.0, Units::Metric), "1.23 km");
        assert_eq!(format_distance(100.0, Units::Imperial), "328 ft");
        assert_eq!(format_distance(3218.688, Units::Imperial), "2.00 mi");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42.4), "42 s");
        assert_eq!(format_duration(71.5), "1 min");
        assert_eq!(format_duration(3_900.0), "1 h 05 min");
    }

    #[test]
    fn test_render_text() {
        let instructions = vec![
            Instruction::new(100.0, 10.0).with_text("Continue"),
            Instruction::new(0.0, 10.0).with_text("Arrive"),
        ];
        let estimate = estimate_path(&instructions, &TravelerProfile::default()).unwrap();
        let text = render_text(&instructions, &estimate, Units::Metric);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Continue"));
        assert!(lines[0].contains("100 m"));
        assert!(lines[1].contains("0.00 kcal"));
        assert!(lines[2].starts_with("total 100 m"));
    }

    #[test]
    fn test_render_json() {
        let instructions = vec![Instruction::new(100.0, 10.0), Instruction::new(50.0, 12.0)];
        let estimate = estimate_path(&instructions, &TravelerProfile::default()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&instructions, &estimate).unwrap()).unwrap();

        assert_eq!(json["segments"].as_array().unwrap().len(), 2);
        assert_eq!(json["segments"][0]["distance"], 100.0);
        assert_eq!(json["segments"][1]["index"], 1);
        assert!(json["segments"][1]["kcal"].as_f64().unwrap() > 0.0);
        assert_eq!(json["total_kcal"].as_f64().unwrap(), estimate.total_kcal);
    }
}
