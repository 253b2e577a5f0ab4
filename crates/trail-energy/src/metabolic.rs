//! Metabolic power model for walking with a load.
//!
//! The base term is the load-carriage equation
//! `M = 1.5W + 2(W+L)(L/W)^2 + T(W+L)(1.5V^2 + 0.35VG)`
//! (velocity squared after the 1.5 scaling), followed by a downhill
//! correction and a floor derived from the traveler's basal metabolic rate.
//! Results are in model units, not strictly watts.

use crate::profile::TravelerProfile;

/// Power estimate for one segment, before conversion to energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerEstimate {
    /// Load-carriage power after the downhill correction.
    pub model_power: f64,
    /// Downhill correction, present only for negative grades.
    pub downhill_correction: Option<f64>,
    /// Basal floor for this traveler.
    pub floor: f64,
    /// Whether the floor replaced the model power.
    pub floor_applied: bool,
}

impl PowerEstimate {
    /// Power used for the energy conversion.
    pub fn effective(&self) -> f64 {
        if self.floor_applied {
            self.floor
        } else {
            self.model_power
        }
    }
}

/// Terrain-adjusted power before any downhill correction.
pub fn load_carriage_power(profile: &TravelerProfile, velocity: f64, percent_grade: f64) -> f64 {
    let w = profile.weight_kg;
    let l = profile.load_kg;
    let total = profile.total_mass_kg();
    let load_ratio = l / w;

    (1.5 * w + 2.0 * total * (load_ratio * load_ratio))
        + profile.terrain_factor
            * total
            * ((1.5 * velocity) * (1.5 * velocity) + 0.35 * (velocity * percent_grade))
}

/// Metabolic savings of walking downhill.
///
/// Only meaningful for negative grades; the caller decides whether to apply it.
pub fn downhill_correction(profile: &TravelerProfile, velocity: f64, percent_grade: f64) -> f64 {
    let w = profile.weight_kg;
    let total = profile.total_mass_kg();
    let descent = -percent_grade;

    (descent * total * velocity) / 3.5 - (total * (descent + 6.0) * (descent + 6.0)) / w
        + (25.0 - velocity * velocity)
}

/// Full power model: load carriage, downhill savings, basal floor.
///
/// The correction is subtracted only when positive, so it can never
/// increase the predicted power.
pub fn estimate_power(
    profile: &TravelerProfile,
    velocity: f64,
    percent_grade: f64,
) -> PowerEstimate {
    let mut model_power = load_carriage_power(profile, velocity, percent_grade);

    let downhill =
        (percent_grade < 0.0).then(|| downhill_correction(profile, velocity, percent_grade));
    if let Some(c) = downhill.filter(|c| *c > 0.0) {
        model_power -= c;
    }

    let floor = profile.power_floor();
    PowerEstimate {
        model_power,
        downhill_correction: downhill,
        floor,
        floor_applied: floor > model_power,
    }
}
