//! Estimator configuration: JSON file, then environment overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, EnergyError};
use crate::path::{ErrorPolicy, PathEstimator, TerminalDelta};
use crate::profile::{Terrain, TravelerProfile};

pub const ENV_WEIGHT_KG: &str = "TRAIL_ENERGY_WEIGHT_KG";
pub const ENV_LOAD_KG: &str = "TRAIL_ENERGY_LOAD_KG";
pub const ENV_TERRAIN: &str = "TRAIL_ENERGY_TERRAIN";
pub const ENV_HEIGHT_CM: &str = "TRAIL_ENERGY_HEIGHT_CM";
pub const ENV_SEX: &str = "TRAIL_ENERGY_SEX";
pub const ENV_AGE: &str = "TRAIL_ENERGY_AGE";
pub const ENV_TERMINAL_DELTA: &str = "TRAIL_ENERGY_TERMINAL_DELTA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub profile: TravelerProfile,
    pub terminal_delta: TerminalDelta,
    pub error_policy: ErrorPolicy,
    /// Estimate segments on the rayon pool.
    pub parallel: bool,
}

impl EstimatorConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads the optional config file and applies process environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|var| std::env::var(var).ok())
    }

    /// Applies overrides from `lookup`, then validates the profile.
    ///
    /// The terrain variable accepts a preset name (`loose_sand`) or a
    /// numeric factor.
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let profile = &mut self.profile;
        if let Some(v) = parsed(&lookup, ENV_WEIGHT_KG)? {
            profile.weight_kg = v;
        }
        if let Some(v) = parsed(&lookup, ENV_LOAD_KG)? {
            profile.load_kg = v;
        }
        if let Some(v) = parsed(&lookup, ENV_HEIGHT_CM)? {
            profile.height_cm = v;
        }
        if let Some(v) = parsed(&lookup, ENV_SEX)? {
            profile.sex = v;
        }
        if let Some(v) = parsed(&lookup, ENV_AGE)? {
            profile.age_years = v;
        }
        if let Some(raw) = lookup(ENV_TERRAIN) {
            profile.terrain_factor = terrain_factor(&raw).ok_or(ConfigError::InvalidEnv {
                var: ENV_TERRAIN,
                value: raw,
            })?;
        }
        if let Some(v) = parsed(&lookup, ENV_TERMINAL_DELTA)? {
            self.terminal_delta = v;
        }

        self.profile.validate()?;
        Ok(self)
    }

    pub fn estimator(&self) -> Result<PathEstimator, EnergyError> {
        Ok(PathEstimator::new(self.profile.clone())?
            .with_terminal_delta(self.terminal_delta)
            .with_error_policy(self.error_policy))
    }
}

fn parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
    }
}

fn terrain_factor(raw: &str) -> Option<f64> {
    if let Ok(factor) = raw.trim().parse::<f64>() {
        return Some(factor);
    }
    let quoted = format!("\"{}\"", raw.trim().to_ascii_lowercase());
    serde_json::from_str::<Terrain>(&quoted).ok().map(Terrain::factor)
}
