use serde::{Deserialize, Serialize};

/// One turn-by-turn instruction of a computed path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Length of the instruction in meters.
    pub distance: f64,
    /// Elevation of the instruction's first point, in meters.
    pub elevation_at_start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Point indices `[from, to]` into the route geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<(usize, usize)>,
}

impl Instruction {
    pub fn new(distance: f64, elevation_at_start: f64) -> Self {
        Self {
            distance,
            elevation_at_start,
            text: None,
            interval: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_interval(mut self, from: usize, to: usize) -> Self {
        self.interval = Some((from, to));
        self
    }
}

/// Energy and time for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentResult {
    pub kcal: f64,
    pub time_seconds: f64,
}

impl SegmentResult {
    pub const ZERO: SegmentResult = SegmentResult {
        kcal: 0.0,
        time_seconds: 0.0,
    };
}
