//! Traveler presets and randomized traveler sampling.
//!
//! Presets cover the kinds of people the estimator is typically run for.
//! [`sample_traveler`] draws plausible profiles around a preset for
//! property-style tests.

mod hiker;

pub use hiker::TravelerPreset;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use trail_energy::profile::{Sex, TravelerProfile};

/// Draws a traveler with normally distributed weight, height and age
/// around `preset`.
///
/// Samples are clamped to adult ranges so the profile always validates.
pub fn sample_traveler(preset: TravelerPreset, rng: &mut impl Rng) -> TravelerProfile {
    let base = preset.profile();
    let sex = if rng.gen_bool(0.5) { Sex::Female } else { Sex::Male };

    base.clone()
        .with_sex(sex)
        .with_weight(sample(rng, base.weight_kg, 10.0).clamp(40.0, 140.0))
        .with_height(sample(rng, base.height_cm, 8.0).clamp(140.0, 210.0))
        .with_age(sample(rng, base.age_years, 10.0).clamp(18.0, 85.0))
}

fn sample(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    Normal::new(mean, std_dev).map_or(mean, |normal| normal.sample(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sampled_travelers_validate() {
        let mut rng = StdRng::seed_from_u64(99);
        for preset in TravelerPreset::ALL {
            for _ in 0..50 {
                let traveler = sample_traveler(preset, &mut rng);
                assert!(traveler.validate().is_ok(), "{traveler:?}");
                assert_eq!(traveler.load_kg, preset.profile().load_kg);
            }
        }
    }
}
