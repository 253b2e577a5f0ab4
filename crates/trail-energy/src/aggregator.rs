//! Running totals over a sequence of segment results.

use serde::Serialize;

use crate::models::SegmentResult;

pub trait PathMetric {
    type Score;
    fn next_segment(&mut self, segment: &SegmentResult);
    fn finish(&mut self) -> Self::Score;
}

/// Cumulative energy of one estimation run.
///
/// Segment energy is floored at zero, so the total never decreases.
#[derive(Debug, Clone, Default)]
pub struct RunningTotal {
    cumulative_kcal: f64,
}

impl RunningTotal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a segment and returns the new running total.
    pub fn add(&mut self, segment: &SegmentResult) -> f64 {
        self.cumulative_kcal += segment.kcal;
        self.cumulative_kcal
    }

    pub fn cumulative_kcal(&self) -> f64 {
        self.cumulative_kcal
    }
}

impl PathMetric for RunningTotal {
    type Score = f64;
    fn next_segment(&mut self, segment: &SegmentResult) {
        self.add(segment);
    }

    fn finish(&mut self) -> f64 {
        self.cumulative_kcal
    }
}

#[derive(Debug, Clone, Default)]
struct ElapsedTime {
    total_seconds: f64,
}

impl PathMetric for ElapsedTime {
    type Score = f64;
    fn next_segment(&mut self, segment: &SegmentResult) {
        self.total_seconds += segment.time_seconds;
    }

    fn finish(&mut self) -> f64 {
        self.total_seconds
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PathTotals {
    pub kcal: f64,
    pub time_seconds: f64,
    pub segments: usize,
}

/// Energy, time and segment count for a whole path.
#[derive(Debug, Clone, Default)]
pub struct Totals {
    energy: RunningTotal,
    time: ElapsedTime,
    segments: usize,
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cumulative_kcal(&self) -> f64 {
        self.energy.cumulative_kcal()
    }
}

impl PathMetric for Totals {
    type Score = PathTotals;
    fn next_segment(&mut self, segment: &SegmentResult) {
        self.energy.next_segment(segment);
        self.time.next_segment(segment);
        self.segments += 1;
    }

    fn finish(&mut self) -> PathTotals {
        PathTotals {
            kcal: self.energy.finish(),
            time_seconds: self.time.finish(),
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(kcal: f64, time_seconds: f64) -> SegmentResult {
        SegmentResult { kcal, time_seconds }
    }

    #[test]
    fn test_running_total_starts_at_zero() {
        assert_eq!(RunningTotal::new().cumulative_kcal(), 0.0);
    }

    #[test]
    fn test_running_total_accumulates() {
        let mut total = RunningTotal::new();
        assert_eq!(total.add(&segment(1.5, 10.0)), 1.5);
        assert_eq!(total.add(&segment(0.0, 0.0)), 1.5);
        assert_eq!(total.add(&segment(2.0, 5.0)), 3.5);
        assert_eq!(total.finish(), 3.5);
    }

    #[test]
    fn test_totals() {
        let mut totals = Totals::new();
        for s in [segment(1.0, 60.0), segment(2.0, 30.0), segment(0.5, 15.0)] {
            totals.next_segment(&s);
        }
        assert_eq!(totals.cumulative_kcal(), 3.5);
        assert_eq!(
            totals.finish(),
            PathTotals {
                kcal: 3.5,
                time_seconds: 105.0,
                segments: 3
            }
        );
    }
}
