//! Named traveler presets.

use trail_energy::profile::{Sex, Terrain, TravelerProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelerPreset {
    /// The default traveler: 80 kg, 165 cm, female, 25 years, no load.
    Reference,
    /// Recreational hiker with a light daypack on dirt trails.
    DayHiker,
    /// Multi-day hiker carrying a full pack through light brush.
    Backpacker,
    /// Older walker on paved paths.
    Senior,
}

impl TravelerPreset {
    pub const ALL: [TravelerPreset; 4] = [
        TravelerPreset::Reference,
        TravelerPreset::DayHiker,
        TravelerPreset::Backpacker,
        TravelerPreset::Senior,
    ];

    pub fn profile(self) -> TravelerProfile {
        match self {
            TravelerPreset::Reference => TravelerProfile::default(),
            TravelerPreset::DayHiker => TravelerProfile::default()
                .with_weight(72.0)
                .with_height(175.0)
                .with_sex(Sex::Male)
                .with_age(34.0)
                .with_load(5.0)
                .with_terrain(Terrain::DirtRoad),
            TravelerPreset::Backpacker => TravelerProfile::default()
                .with_weight(68.0)
                .with_height(170.0)
                .with_age(29.0)
                .with_load(18.0)
                .with_terrain(Terrain::LightBrush),
            TravelerPreset::Senior => TravelerProfile::default()
                .with_weight(74.0)
                .with_height(162.0)
                .with_age(71.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_default() {
        assert_eq!(TravelerPreset::Reference.profile(), TravelerProfile::default());
    }

    #[test]
    fn test_presets_validate() {
        for preset in TravelerPreset::ALL {
            assert!(preset.profile().validate().is_ok());
        }
    }

    #[test]
    fn test_backpacker_carries_load() {
        let profile = TravelerPreset::Backpacker.profile();
        assert!(profile.load_kg > 0.0);
        assert!(profile.terrain_factor > 1.0);
    }
}
