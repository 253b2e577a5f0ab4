//! Energy cost of graph edges for calorie-optimal routing.
//!
//! Unlike the itinerary estimator, edge weights assume a fixed walking pace
//! and compare the predicted power against the sedentary rate expressed in
//! watts, with a traveler-specific tolerance.

use crate::errors::EnergyError;
use crate::grade::clamp_grade;
use crate::metabolic::{downhill_correction, load_carriage_power};
use crate::profile::{Sex, TravelerProfile};
use crate::segment::KCAL_DIVISOR;

/// Three miles per hour, in m/s.
pub const WALKING_PACE: f64 = 1.34112;

/// Heaviest load the tolerance correction accepts.
pub const MAX_LOAD_KG: f64 = 51.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const REFERENCE_HEIGHT_CM: f64 = 151.0;
const REFERENCE_AGE_YEARS: f64 = 18.0;

/// Cost function a router minimises over edges.
pub trait Weighting {
    /// Weight of traversing `distance` meters with the given elevation change.
    fn edge_weight(&self, distance: f64, elevation_delta: f64) -> Result<f64, EnergyError>;

    fn edge_seconds(&self, distance: f64) -> f64;

    /// Lower bound of `edge_weight` for `distance` meters, whatever the
    /// elevation change.
    fn min_weight(&self, distance: f64) -> f64;
}

#[derive(Debug, Clone)]
pub struct CalorieWeighting {
    profile: TravelerProfile,
    sedentary_watts: f64,
    tolerance: f64,
}

impl CalorieWeighting {
    pub fn new(profile: TravelerProfile) -> Result<Self, EnergyError> {
        profile.validate()?;
        let sedentary_watts = sedentary_watts(&profile);
        let tolerance = sedentary_watts * tolerance_fraction(&profile)?;
        Ok(Self {
            profile,
            sedentary_watts,
            tolerance,
        })
    }

    pub fn profile(&self) -> &TravelerProfile {
        &self.profile
    }

    /// Sedentary metabolic rate in watts.
    pub fn sedentary_watts(&self) -> f64 {
        self.sedentary_watts
    }

    /// Clamped percent grade of an edge, zero for zero-length edges.
    pub fn edge_grade(distance: f64, elevation_delta: f64) -> f64 {
        if distance == 0.0 {
            return 0.0;
        }
        clamp_grade(elevation_delta / distance * 100.0)
    }

    /// Lowest power `edge_power` can return: the model only wins below the
    /// sedentary rate when it is within the tolerance of it.
    pub fn min_power(&self) -> f64 {
        (self.sedentary_watts - self.tolerance.max(0.0)).max(0.0)
    }

    /// Predicted power for an edge, never below the sedentary rate unless
    /// the model comes within the tolerance of it.
    pub fn edge_power(&self, distance: f64, elevation_delta: f64) -> f64 {
        let grade = Self::edge_grade(distance, elevation_delta);
        let model = net_power(&self.profile, WALKING_PACE, grade);
        if self.sedentary_watts > model + self.tolerance {
            self.sedentary_watts
        } else {
            model
        }
    }

    pub fn edge_kcal(&self, distance: f64, elevation_delta: f64) -> Result<f64, EnergyError> {
        if !distance.is_finite() || !elevation_delta.is_finite() {
            return Err(EnergyError::InvalidInstruction {
                index: 0,
                reason: format!("edge {distance} m / {elevation_delta} m is not finite"),
            });
        }
        let power = self.edge_power(distance, elevation_delta);
        let kcal = power * self.edge_seconds(distance) / KCAL_DIVISOR;
        if kcal < 0.0 {
            return Err(EnergyError::NegativeEnergy(kcal));
        }
        Ok(kcal)
    }
}

impl Weighting for CalorieWeighting {
    fn edge_weight(&self, distance: f64, elevation_delta: f64) -> Result<f64, EnergyError> {
        self.edge_kcal(distance, elevation_delta)
    }

    fn edge_seconds(&self, distance: f64) -> f64 {
        distance / WALKING_PACE
    }

    fn min_weight(&self, distance: f64) -> f64 {
        self.min_power() * self.edge_seconds(distance) / KCAL_DIVISOR
    }
}

/// Load-carriage power minus the downhill correction, applied for every
/// negative grade.
fn net_power(profile: &TravelerProfile, velocity: f64, percent_grade: f64) -> f64 {
    let m = load_carriage_power(profile, velocity, percent_grade);
    if percent_grade < 0.0 {
        m - downhill_correction(profile, velocity, percent_grade)
    } else {
        m
    }
}

/// Sedentary rate in watts: BMR converted from kcal/day, times 1.2.
fn sedentary_watts(profile: &TravelerProfile) -> f64 {
    1.2 * (profile.basal_metabolic_rate() * KCAL_DIVISOR / SECONDS_PER_DAY)
}

/// Fraction of the sedentary rate the model may undershoot before the
/// sedentary rate takes over.
fn tolerance_fraction(profile: &TravelerProfile) -> Result<f64, EnergyError> {
    let female = profile.sex == Sex::Female;
    let weight = profile.weight_kg.ln();
    let mut fraction = if female {
        -0.278 * weight + 1.6773
    } else {
        -0.183 * weight + 1.3233
    };

    let height_step = if female {
        0.000546551724137932
    } else {
        0.00121509433962264
    };
    fraction += height_step * (profile.height_cm - REFERENCE_HEIGHT_CM);

    if profile.load_kg != 0.0 {
        if profile.load_kg > MAX_LOAD_KG {
            return Err(EnergyError::LoadTooHeavy(profile.load_kg));
        }
        let load_step = if female {
            0.00764607843137255
        } else {
            0.00698137254901961
        };
        fraction -= load_step * profile.load_kg;
    }

    let age_step = if female {
        0.00196829268292683
    } else {
        0.00233536585365854
    };
    fraction -= age_step * (profile.age_years - REFERENCE_AGE_YEARS);

    Ok(fraction)
}

/// Estimates the remaining energy to a goal from the straight-line
/// distance and elevation difference.
#[derive(Debug, Clone)]
pub struct BeelineApproximator {
    profile: TravelerProfile,
    sedentary_watts: f64,
    goal_elevation: f64,
}

impl BeelineApproximator {
    pub fn new(weighting: &CalorieWeighting, goal_elevation: f64) -> Self {
        Self {
            profile: weighting.profile.clone(),
            sedentary_watts: weighting.sedentary_watts,
            goal_elevation,
        }
    }

    pub fn with_goal(mut self, goal_elevation: f64) -> Self {
        self.goal_elevation = goal_elevation;
        self
    }

    /// Remaining kcal from a node `distance_to_goal` meters away at
    /// `elevation`.
    pub fn approximate(&self, distance_to_goal: f64, elevation: f64) -> Result<f64, EnergyError> {
        let grade = CalorieWeighting::edge_grade(distance_to_goal, self.goal_elevation - elevation);
        let seconds = distance_to_goal / WALKING_PACE;
        let model = net_power(&self.profile, WALKING_PACE, grade);
        let power = if self.sedentary_watts > model {
            self.sedentary_watts
        } else {
            model
        };

        let kcal = power * seconds / KCAL_DIVISOR;
        if kcal < 0.0 {
            return Err(EnergyError::NegativeEnergy(kcal));
        }
        Ok(kcal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_seconds_use_fixed_pace() {
        let weighting = CalorieWeighting::new(TravelerProfile::default()).unwrap();
        assert!((weighting.edge_seconds(134.112) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_min_weight_bounds_every_grade() {
        let profiles = [
            TravelerProfile::default(),
            TravelerProfile::default().with_sex(Sex::Male),
            TravelerProfile::default().with_weight(55.0).with_load(15.0),
        ];
        for profile in profiles {
            let weighting = CalorieWeighting::new(profile).unwrap();
            let bound = weighting.min_weight(100.0);
            assert!(bound > 0.0);
            for delta in (-40..=60).map(|d| d as f64) {
                let weight = weighting.edge_weight(100.0, delta).unwrap();
                assert!(weight >= bound, "delta {delta}: {weight} < {bound}");
            }
        }
    }

    #[test]
    fn test_min_weight_is_energy() {
        let weighting = CalorieWeighting::new(TravelerProfile::default()).unwrap();
        // same unit as the edge weight, well below the flat cost
        assert!(weighting.min_weight(100.0) < weighting.edge_weight(100.0, 0.0).unwrap());
        assert_eq!(weighting.min_weight(0.0), 0.0);
    }

    #[test]
    fn test_sedentary_watts() {
        let weighting = CalorieWeighting::new(TravelerProfile::default()).unwrap();
        let expected = 1.2 * 1586.0 * 4184.0 / 86_400.0;
        assert!((weighting.sedentary_watts() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_edge_is_flat() {
        assert_eq!(CalorieWeighting::edge_grade(0.0, 10.0), 0.0);
        let weighting = CalorieWeighting::new(TravelerProfile::default()).unwrap();
        assert_eq!(weighting.edge_kcal(0.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_flat_edge_uses_model_power() {
        let profile = TravelerProfile::default();
        let weighting = CalorieWeighting::new(profile.clone()).unwrap();
        let model = load_carriage_power(&profile, WALKING_PACE, 0.0);
        assert_eq!(weighting.edge_power(100.0, 0.0), model);

        let kcal = weighting.edge_weight(100.0, 0.0).unwrap();
        assert!((kcal - model * (100.0 / WALKING_PACE) / 4184.0).abs() < 1e-9);
    }

    #[test]
    fn test_climb_costs_more() {
        let weighting = CalorieWeighting::new(TravelerProfile::default()).unwrap();
        let flat = weighting.edge_weight(100.0, 0.0).unwrap();
        let climb = weighting.edge_weight(100.0, 8.0).unwrap();
        assert!(climb > flat);
    }

    #[test]
    fn test_steep_descent_clamped() {
        let weighting = CalorieWeighting::new(TravelerProfile::default()).unwrap();
        assert_eq!(
            weighting.edge_weight(100.0, -30.0).unwrap(),
            weighting.edge_weight(100.0, -8.0).unwrap()
        );
    }

    #[test]
    fn test_rejects_heavy_load() {
        let profile = TravelerProfile::default().with_load(60.0);
        let err = CalorieWeighting::new(profile).unwrap_err();
        assert_eq!(err, EnergyError::LoadTooHeavy(60.0));
    }

    #[test]
    fn test_tolerance_at_reference_traveler() {
        // 151 cm, 18 years, no load: only the weight term remains
        let profile = TravelerProfile::default().with_height(151.0).with_age(18.0);
        let fraction = tolerance_fraction(&profile).unwrap();
        assert!((fraction - (-0.278 * 80f64.ln() + 1.6773)).abs() < 1e-12);
    }

    #[test]
    fn test_beeline_is_lower_bound_for_flat_goal() {
        let weighting = CalorieWeighting::new(TravelerProfile::default()).unwrap();
        let beeline = BeelineApproximator::new(&weighting, 100.0);
        let estimate = beeline.approximate(1000.0, 100.0).unwrap();
        let edge = weighting.edge_weight(1000.0, 0.0).unwrap();
        assert!((estimate - edge).abs() < 1e-9);
    }

    #[test]
    fn test_beeline_at_goal_is_zero() {
        let weighting = CalorieWeighting::new(TravelerProfile::default()).unwrap();
        let beeline = BeelineApproximator::new(&weighting, 0.0).with_goal(250.0);
        assert_eq!(beeline.approximate(0.0, 200.0).unwrap(), 0.0);
    }
}
