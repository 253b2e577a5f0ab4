//! Non-fatal events observed during a path estimation.

use serde::Serialize;
use tracing::info;

use crate::segment::SegmentEstimate;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Instructions whose predicted power was replaced by the basal floor.
    pub floor_substitutions: Vec<usize>,
    /// Instructions skipped because their distance was zero.
    pub zero_distance_segments: usize,
    /// Whether the terminal instruction reused the previous elevation change.
    pub stale_terminal_delta: bool,
}

impl Diagnostics {
    pub(crate) fn record(&mut self, index: usize, estimate: &SegmentEstimate) {
        if estimate.is_zero_distance() {
            self.zero_distance_segments += 1;
        }
        if estimate.floor_applied {
            info!(
                index,
                floor = estimate.power,
                percent_grade = estimate.percent_grade,
                "predicted power below basal floor, using floor"
            );
            self.floor_substitutions.push(index);
        }
    }

    pub fn floor_substitution_count(&self) -> usize {
        self.floor_substitutions.len()
    }
}
