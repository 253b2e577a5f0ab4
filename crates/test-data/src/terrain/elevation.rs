//! Perlin noise-based elevation generation.

use noise::{NoiseFn, Perlin};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Elevation surface sampled along generated routes.
///
/// Several octaves of Perlin noise give long climbs with small-scale
/// undulation on top. Presets are tuned so typical route legs produce
/// grades in the range the energy model is built for.
#[derive(Debug, Clone)]
pub struct ElevationGenerator {
    perlin: Perlin,
    /// Mean elevation in meters.
    base_elevation: f64,
    /// Maximum deviation from the base, in meters.
    relief: f64,
    /// Spatial frequency in cycles per degree.
    frequency: f64,
    octaves: u32,
}

impl ElevationGenerator {
    pub fn new(seed: u32) -> Self {
        Self::foothills(seed)
    }

    /// High mountain terrain with large relief.
    pub fn alpine(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 1900.0,
            relief: 800.0,
            frequency: 40.0,
            octaves: 5,
        }
    }

    pub fn foothills(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 1650.0,
            relief: 300.0,
            frequency: 50.0,
            octaves: 4,
        }
    }

    /// Rolling lowland terrain with only a few meters of relief.
    pub fn rolling(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 20.0,
            relief: 15.0,
            frequency: 80.0,
            octaves: 2,
        }
    }

    pub fn with_base_elevation(mut self, elevation: f64) -> Self {
        self.base_elevation = elevation;
        self
    }

    pub fn with_relief(mut self, relief: f64) -> Self {
        self.relief = relief;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn base_elevation(&self) -> f64 {
        self.base_elevation
    }

    pub fn relief(&self) -> f64 {
        self.relief
    }

    /// Elevation at a lat/lon coordinate, within `base ± relief`.
    pub fn elevation_at(&self, lat: f64, lon: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;
        let mut max_amplitude = 0.0;

        for _ in 0..self.octaves {
            total += self.perlin.get([lat * frequency, lon * frequency]) * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        self.base_elevation + (total / max_amplitude).clamp(-1.0, 1.0) * self.relief
    }

    pub fn elevation_profile(&self, coords: &[(f64, f64)]) -> Vec<f64> {
        coords
            .iter()
            .map(|(lat, lon)| self.elevation_at(*lat, *lon))
            .collect()
    }
}

/// Adds barometric/GPS elevation noise with the given standard deviation.
///
/// A non-positive or non-finite deviation leaves the elevation unchanged.
pub fn add_elevation_jitter(elevation: f64, rng: &mut impl Rng, std_dev: f64) -> f64 {
    match Normal::new(0.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => elevation + normal.sample(rng),
        _ => elevation,
    }
}
