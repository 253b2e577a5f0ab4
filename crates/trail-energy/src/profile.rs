//! Traveler parameters used by the metabolic model.

use serde::{Deserialize, Serialize};

use crate::errors::EnergyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Sex::Female),
            "male" | "m" => Ok(Sex::Male),
            other => Err(format!("unknown sex: {other}")),
        }
    }
}

/// Surface presets for the terrain difficulty factor.
///
/// The factor scales the velocity and grade terms of the load-carriage
/// equation. Values follow the published walking terrain coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Paved,
    DirtRoad,
    LightBrush,
    HeavyBrush,
    Swampy,
    LooseSand,
}

impl Terrain {
    pub fn factor(self) -> f64 {
        match self {
            Terrain::Paved => 1.0,
            Terrain::DirtRoad => 1.1,
            Terrain::LightBrush => 1.2,
            Terrain::HeavyBrush => 1.5,
            Terrain::Swampy => 1.8,
            Terrain::LooseSand => 2.1,
        }
    }
}

/// Physical description of the person walking the route.
///
/// Constant for one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelerProfile {
    pub weight_kg: f64,
    /// Carried load in kilograms.
    pub load_kg: f64,
    /// Multiplicative difficulty scalar, 1.0 on paved ground.
    pub terrain_factor: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub age_years: f64,
}

impl Default for TravelerProfile {
    fn default() -> Self {
        Self {
            weight_kg: 80.0,
            load_kg: 0.0,
            terrain_factor: 1.0,
            height_cm: 165.0,
            sex: Sex::Female,
            age_years: 25.0,
        }
    }
}

impl TravelerProfile {
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    pub fn with_load(mut self, load_kg: f64) -> Self {
        self.load_kg = load_kg;
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain_factor = terrain.factor();
        self
    }

    pub fn with_terrain_factor(mut self, factor: f64) -> Self {
        self.terrain_factor = factor;
        self
    }

    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = height_cm;
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_age(mut self, age_years: f64) -> Self {
        self.age_years = age_years;
        self
    }

    /// Checks the profile before any segment is processed.
    ///
    /// Weight and height must be strictly positive; load and age must be
    /// non-negative; the terrain factor must be positive; every field must
    /// be finite.
    pub fn validate(&self) -> Result<(), EnergyError> {
        let fields = [
            ("weight_kg", self.weight_kg),
            ("load_kg", self.load_kg),
            ("terrain_factor", self.terrain_factor),
            ("height_cm", self.height_cm),
            ("age_years", self.age_years),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(EnergyError::InvalidProfile { field, value });
            }
        }

        let invalid = |field, value| Err(EnergyError::InvalidProfile { field, value });
        if self.weight_kg <= 0.0 {
            return invalid("weight_kg", self.weight_kg);
        }
        if self.height_cm <= 0.0 {
            return invalid("height_cm", self.height_cm);
        }
        if self.load_kg < 0.0 {
            return invalid("load_kg", self.load_kg);
        }
        if self.terrain_factor <= 0.0 {
            return invalid("terrain_factor", self.terrain_factor);
        }
        if self.age_years < 0.0 {
            return invalid("age_years", self.age_years);
        }
        Ok(())
    }

    /// Combined mass of traveler and load.
    pub fn total_mass_kg(&self) -> f64 {
        self.weight_kg + self.load_kg
    }

    /// Harris-Benedict basal metabolic rate, in kcal per day.
    pub fn basal_metabolic_rate(&self) -> f64 {
        let (w, h, a) = (self.weight_kg, self.height_cm, self.age_years);
        match self.sex {
            Sex::Female => 655.0 + 9.6 * w + 1.7 * h - 4.7 * a,
            Sex::Male => 66.0 + 13.7 * w + 5.0 * h - 6.8 * a,
        }
    }

    /// Sedentary metabolic rate, BMR scaled by the 1.2 activity factor.
    pub fn sedentary_metabolic_rate(&self) -> f64 {
        1.2 * self.basal_metabolic_rate()
    }

    /// Lowest power the cost model is allowed to predict: `SMR - BMR`.
    pub fn power_floor(&self) -> f64 {
        self.sedentary_metabolic_rate() - self.basal_metabolic_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = TravelerProfile::default();
        assert_eq!(profile.weight_kg, 80.0);
        assert_eq!(profile.load_kg, 0.0);
        assert_eq!(profile.terrain_factor, 1.0);
        assert_eq!(profile.height_cm, 165.0);
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.age_years, 25.0);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_bmr_by_sex() {
        let female = TravelerProfile::default();
        assert!((female.basal_metabolic_rate() - 1586.0).abs() < 1e-9);

        let male = female.with_sex(Sex::Male);
        // 66 + 13.7 * 80 + 5 * 165 - 6.8 * 25
        assert!((male.basal_metabolic_rate() - 1817.0).abs() < 1e-9);
    }

    #[test]
    fn test_floor_is_fifth_of_bmr() {
        let profile = TravelerProfile::default();
        let expected = 0.2 * profile.basal_metabolic_rate();
        assert!((profile.power_floor() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let err = TravelerProfile::default().with_weight(0.0).validate();
        assert_eq!(
            err,
            Err(EnergyError::InvalidProfile {
                field: "weight_kg",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let err = TravelerProfile::default().with_height(-1.0).validate();
        assert!(matches!(
            err,
            Err(EnergyError::InvalidProfile {
                field: "height_cm",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan_fields() {
        let err = TravelerProfile::default().with_age(f64::NAN).validate();
        assert!(matches!(
            err,
            Err(EnergyError::InvalidProfile {
                field: "age_years",
                ..
            })
        ));
    }

    #[test]
    fn test_terrain_presets() {
        let profile = TravelerProfile::default().with_terrain(Terrain::LooseSand);
        assert!((profile.terrain_factor - 2.1).abs() < 1e-12);
        assert_eq!(Terrain::Paved.factor(), 1.0);
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Female".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!("m".parse::<Sex>(), Ok(Sex::Male));
        assert!("x".parse::<Sex>().is_err());
    }

    #[test]
    fn test_deserialize_partial_profile() {
        let profile: TravelerProfile =
            serde_json::from_str(r#"{"weight_kg": 70.0, "sex": "male"}"#).unwrap();
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.height_cm, 165.0);
    }
}
