//! Whole-path estimation: elevation deltas, per-segment estimates and the
//! running total.

use rayon::prelude::*;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::aggregator::{PathMetric, Totals};
use crate::diagnostics::Diagnostics;
use crate::errors::EnergyError;
use crate::grade::elevation_delta;
use crate::models::{Instruction, SegmentResult};
use crate::profile::TravelerProfile;
use crate::segment::{SegmentEstimate, estimate_validated};

/// Elevation change used for the last instruction, which has no successor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalDelta {
    /// Reuse the change computed for the second-to-last instruction.
    #[default]
    #[serde(alias = "stale")]
    ReuseStale,
    /// Treat the last instruction as flat.
    Zero,
}

impl std::str::FromStr for TerminalDelta {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stale" | "reuse_stale" => Ok(TerminalDelta::ReuseStale),
            "zero" => Ok(TerminalDelta::Zero),
            other => Err(format!("unknown terminal delta policy: {other}")),
        }
    }
}

/// What to do when a segment cannot be estimated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first failing instruction.
    #[default]
    Abort,
    /// Keep going; failed segments are reported and left out of the total.
    Collect,
}

/// A successfully estimated instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentEntry {
    pub index: usize,
    #[serde(flatten)]
    pub result: SegmentResult,
    /// Running total after this instruction.
    pub cumulative_kcal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentFailure {
    pub index: usize,
    #[serde(serialize_with = "serialize_display")]
    pub error: EnergyError,
}

fn serialize_display<S: Serializer>(error: &EnergyError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEstimate {
    pub segments: Vec<SegmentEntry>,
    pub total_kcal: f64,
    pub total_seconds: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<SegmentFailure>,
    pub diagnostics: Diagnostics,
}

impl PathEstimate {
    pub fn results(&self) -> impl Iterator<Item = &SegmentResult> {
        self.segments.iter().map(|s| &s.result)
    }
}

/// Resolves the elevation change of every instruction up front.
///
/// Returns the deltas and whether the terminal instruction reused a stale
/// value.
pub fn elevation_deltas(instructions: &[Instruction], terminal: TerminalDelta) -> (Vec<f64>, bool) {
    let mut deltas: Vec<f64> = instructions
        .windows(2)
        .map(|pair| elevation_delta(pair[0].elevation_at_start, pair[1].elevation_at_start))
        .collect();

    if instructions.is_empty() {
        return (deltas, false);
    }

    match (terminal, deltas.last().copied()) {
        (TerminalDelta::ReuseStale, Some(stale)) => {
            deltas.push(stale);
            (deltas, true)
        }
        _ => {
            deltas.push(0.0);
            (deltas, false)
        }
    }
}

/// Estimates every instruction of a path for one traveler.
#[derive(Debug, Clone)]
pub struct PathEstimator {
    profile: TravelerProfile,
    terminal_delta: TerminalDelta,
    error_policy: ErrorPolicy,
}

impl PathEstimator {
    /// Fails fast on an invalid profile.
    pub fn new(profile: TravelerProfile) -> Result<Self, EnergyError> {
        profile.validate()?;
        Ok(Self {
            profile,
            terminal_delta: TerminalDelta::default(),
            error_policy: ErrorPolicy::default(),
        })
    }

    pub fn with_terminal_delta(mut self, terminal_delta: TerminalDelta) -> Self {
        self.terminal_delta = terminal_delta;
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn profile(&self) -> &TravelerProfile {
        &self.profile
    }

    fn estimate_at(
        &self,
        index: usize,
        instruction: &Instruction,
        delta: f64,
    ) -> Result<SegmentEstimate, EnergyError> {
        estimate_validated(instruction.distance, delta, &self.profile)
            .map_err(|e| e.at_instruction(index))
    }

    /// Sequential estimation.
    pub fn estimate(&self, instructions: &[Instruction]) -> Result<PathEstimate, EnergyError> {
        let (deltas, stale) = elevation_deltas(instructions, self.terminal_delta);
        let outcomes = instructions
            .iter()
            .zip(&deltas)
            .enumerate()
            .map(|(i, (instruction, delta))| (i, self.estimate_at(i, instruction, *delta)));
        self.assemble(outcomes, stale)
    }

    /// Estimates segments on the rayon pool and reduces them in order.
    ///
    /// Produces the same segments and diagnostics as [`PathEstimator::estimate`].
    pub fn estimate_parallel(
        &self,
        instructions: &[Instruction],
    ) -> Result<PathEstimate, EnergyError> {
        let (deltas, stale) = elevation_deltas(instructions, self.terminal_delta);
        let outcomes: Vec<_> = instructions
            .par_iter()
            .zip(deltas.par_iter())
            .enumerate()
            .map(|(i, (instruction, delta))| (i, self.estimate_at(i, instruction, *delta)))
            .collect();
        self.assemble(outcomes.into_iter(), stale)
    }

    fn assemble(
        &self,
        outcomes: impl Iterator<Item = (usize, Result<SegmentEstimate, EnergyError>)>,
        stale_terminal_delta: bool,
    ) -> Result<PathEstimate, EnergyError> {
        let mut totals = Totals::new();
        let mut diagnostics = Diagnostics {
            stale_terminal_delta,
            ..Default::default()
        };
        let mut segments = Vec::new();
        let mut failures = Vec::new();

        for (index, outcome) in outcomes {
            match outcome {
                Ok(estimate) => {
                    diagnostics.record(index, &estimate);
                    totals.next_segment(&estimate.result);
                    debug!(
                        index,
                        kcal = estimate.result.kcal,
                        time_seconds = estimate.result.time_seconds,
                        percent_grade = estimate.percent_grade,
                        "estimated segment"
                    );
                    segments.push(SegmentEntry {
                        index,
                        result: estimate.result,
                        cumulative_kcal: totals.cumulative_kcal(),
                    });
                }
                Err(error) => match self.error_policy {
                    ErrorPolicy::Abort => return Err(error),
                    ErrorPolicy::Collect => {
                        warn!(index, %error, "skipping segment");
                        failures.push(SegmentFailure { index, error });
                    }
                },
            }
        }

        let summary = totals.finish();
        info!(
            segments = summary.segments,
            failures = failures.len(),
            total_kcal = summary.kcal,
            total_seconds = summary.time_seconds,
            floor_substitutions = diagnostics.floor_substitution_count(),
            "estimated path"
        );

        Ok(PathEstimate {
            segments,
            total_kcal: summary.kcal,
            total_seconds: summary.time_seconds,
            failures,
            diagnostics,
        })
    }

    /// Lazily estimates instructions in order, yielding the running total
    /// after each one.
    pub fn stream<'a>(&'a self, instructions: &'a [Instruction]) -> PathStream<'a> {
        let (deltas, stale_terminal_delta) = elevation_deltas(instructions, self.terminal_delta);
        PathStream {
            estimator: self,
            instructions,
            deltas,
            totals: Totals::new(),
            diagnostics: Diagnostics {
                stale_terminal_delta,
                ..Default::default()
            },
            next: 0,
            halted: false,
        }
    }
}

/// Iterator returned by [`PathEstimator::stream`].
///
/// Under [`ErrorPolicy::Abort`] the stream ends after the first error.
pub struct PathStream<'a> {
    estimator: &'a PathEstimator,
    instructions: &'a [Instruction],
    deltas: Vec<f64>,
    totals: Totals,
    diagnostics: Diagnostics,
    next: usize,
    halted: bool,
}

impl PathStream<'_> {
    pub fn cumulative_kcal(&self) -> f64 {
        self.totals.cumulative_kcal()
    }

    /// Diagnostics for the instructions yielded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

impl Iterator for PathStream<'_> {
    type Item = Result<SegmentEntry, EnergyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let index = self.next;
        let instruction = self.instructions.get(index)?;
        self.next += 1;

        match self.estimator.estimate_at(index, instruction, self.deltas[index]) {
            Ok(estimate) => {
                self.diagnostics.record(index, &estimate);
                self.totals.next_segment(&estimate.result);
                Some(Ok(SegmentEntry {
                    index,
                    result: estimate.result,
                    cumulative_kcal: self.totals.cumulative_kcal(),
                }))
            }
            Err(error) => {
                if self.estimator.error_policy == ErrorPolicy::Abort {
                    self.halted = true;
                }
                Some(Err(error))
            }
        }
    }
}

/// Estimates a path with the default terminal and error policies.
pub fn estimate_path(
    instructions: &[Instruction],
    profile: &TravelerProfile,
) -> Result<PathEstimate, EnergyError> {
    PathEstimator::new(profile.clone())?.estimate(instructions)
}

/// Parallel counterpart of [`estimate_path`].
pub fn estimate_path_parallel(
    instructions: &[Instruction],
    profile: &TravelerProfile,
) -> Result<PathEstimate, EnergyError> {
    PathEstimator::new(profile.clone())?.estimate_parallel(instructions)
}
