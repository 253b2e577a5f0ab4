//! Per-instruction energy and time estimation.

use serde::Serialize;

use crate::errors::EnergyError;
use crate::grade::{percent_grade, walking_velocity};
use crate::metabolic::estimate_power;
use crate::models::SegmentResult;
use crate::profile::TravelerProfile;

/// Divisor converting power x seconds into kilocalories.
pub const KCAL_DIVISOR: f64 = 4184.0;

/// Intermediate values of one segment estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentEstimate {
    pub result: SegmentResult,
    /// Clamped percent grade; zero for zero-distance segments.
    pub percent_grade: f64,
    /// Walking velocity in m/s; zero for zero-distance segments.
    pub velocity: f64,
    /// Power used for the energy conversion.
    pub power: f64,
    pub downhill_correction: Option<f64>,
    pub floor_applied: bool,
}

impl SegmentEstimate {
    fn zero_distance() -> Self {
        Self {
            result: SegmentResult::ZERO,
            percent_grade: 0.0,
            velocity: 0.0,
            power: 0.0,
            downhill_correction: None,
            floor_applied: false,
        }
    }

    pub fn is_zero_distance(&self) -> bool {
        self.velocity == 0.0 && self.result == SegmentResult::ZERO
    }
}

/// Estimates energy and time for one segment.
///
/// Fails with [`EnergyError::InvalidProfile`] before any arithmetic when
/// the profile does not validate.
pub fn estimate_segment(
    distance: f64,
    elevation_delta: f64,
    profile: &TravelerProfile,
) -> Result<SegmentResult, EnergyError> {
    estimate_segment_detailed(distance, elevation_delta, profile).map(|e| e.result)
}

/// Like [`estimate_segment`], keeping grade, velocity and power.
///
/// Input errors are reported as [`EnergyError::InvalidInstruction`] with
/// index 0; path estimation rewrites the index.
pub fn estimate_segment_detailed(
    distance: f64,
    elevation_delta: f64,
    profile: &TravelerProfile,
) -> Result<SegmentEstimate, EnergyError> {
    profile.validate()?;
    estimate_validated(distance, elevation_delta, profile)
}

/// Segment estimate for a profile that has already been validated.
pub(crate) fn estimate_validated(
    distance: f64,
    elevation_delta: f64,
    profile: &TravelerProfile,
) -> Result<SegmentEstimate, EnergyError> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(EnergyError::InvalidInstruction {
            index: 0,
            reason: format!("distance must be a non-negative finite number, got {distance}"),
        });
    }
    if distance == 0.0 {
        return Ok(SegmentEstimate::zero_distance());
    }
    if !elevation_delta.is_finite() {
        return Err(EnergyError::InvalidInstruction {
            index: 0,
            reason: format!("elevation change must be finite, got {elevation_delta}"),
        });
    }

    let grade = percent_grade(distance, elevation_delta);
    let velocity = walking_velocity(grade);
    if velocity <= 0.0 || !velocity.is_finite() {
        return Err(EnergyError::DegenerateVelocity {
            velocity,
            percent_grade: grade,
        });
    }

    let time_seconds = distance / velocity;
    let power = estimate_power(profile, velocity, grade);
    let kcal = (power.effective() * time_seconds) / KCAL_DIVISOR;

    // a tiny positive velocity still overflows time and energy
    if !time_seconds.is_finite() || !kcal.is_finite() {
        return Err(EnergyError::DegenerateVelocity {
            velocity,
            percent_grade: grade,
        });
    }
    let kcal = if kcal < 0.0 { 0.0 } else { kcal };

    Ok(SegmentEstimate {
        result: SegmentResult { kcal, time_seconds },
        percent_grade: grade,
        velocity,
        power: power.effective(),
        downhill_correction: power.downhill_correction,
        floor_applied: power.floor_applied,
    })
}
