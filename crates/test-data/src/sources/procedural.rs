//! Procedural route generation.

use geo::{Distance as _, Haversine, Point};
use rand::Rng;
use trail_energy::models::Instruction;

use crate::config::{BoundingBox, Region};
use crate::terrain::{ElevationGenerator, add_elevation_jitter};

const TURN_TEXTS: [&str; 5] = [
    "Continue",
    "Turn left",
    "Turn right",
    "Keep left",
    "Keep right",
];

/// Configuration for procedural route generation.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Target distance in meters.
    pub distance_meters: f64,
    /// Starting point (lat, lon). If None, random within bounds.
    pub start_point: Option<(f64, f64)>,
    pub bounds: BoundingBox,
    /// Elevation noise standard deviation in meters.
    pub elevation_jitter_m: f64,
    /// Approximate distance between route points in meters.
    pub point_spacing_m: f64,
    /// Inclusive range of route legs covered by one instruction.
    pub legs_per_instruction: (usize, usize),
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            distance_meters: 3000.0,
            start_point: None,
            bounds: Region::FOOTHILLS,
            elevation_jitter_m: 0.0,
            point_spacing_m: 25.0,
            legs_per_instruction: (2, 8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: f64,
}

impl RoutePoint {
    fn distance_to(&self, other: &RoutePoint) -> f64 {
        Haversine.distance(Point::new(self.lon, self.lat), Point::new(other.lon, other.lat))
    }
}

/// Route geometry together with the instructions describing it.
///
/// Instruction intervals index into `points`. The last instruction is a
/// zero-length arrival at the final point.
#[derive(Debug, Clone)]
pub struct GeneratedRoute {
    pub points: Vec<RoutePoint>,
    pub instructions: Vec<Instruction>,
}

impl GeneratedRoute {
    pub fn total_distance(&self) -> f64 {
        self.instructions.iter().map(|i| i.distance).sum()
    }
}

/// Generates synthetic walking routes with realistic elevation.
pub struct RouteGenerator {
    config: RouteConfig,
    elevation: ElevationGenerator,
}

impl RouteGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            config: RouteConfig::default(),
            elevation: ElevationGenerator::foothills(seed),
        }
    }

    /// Picks an elevation model to match the region.
    pub fn for_region(bounds: BoundingBox, seed: u32) -> Self {
        let elevation = if bounds == Region::SIERRA {
            ElevationGenerator::alpine(seed)
        } else if bounds == Region::LOWLANDS {
            ElevationGenerator::rolling(seed)
        } else {
            ElevationGenerator::foothills(seed)
        };

        Self {
            config: RouteConfig {
                bounds,
                ..Default::default()
            },
            elevation,
        }
    }

    pub fn with_distance(mut self, meters: f64) -> Self {
        self.config.distance_meters = meters;
        self
    }

    pub fn with_start(mut self, lat: f64, lon: f64) -> Self {
        self.config.start_point = Some((lat, lon));
        self
    }

    pub fn with_elevation(mut self, elevation: ElevationGenerator) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_elevation_jitter(mut self, meters: f64) -> Self {
        self.config.elevation_jitter_m = meters;
        self
    }

    pub fn with_point_spacing(mut self, meters: f64) -> Self {
        self.config.point_spacing_m = meters;
        self
    }

    pub fn with_legs_per_instruction(mut self, min: usize, max: usize) -> Self {
        let min = min.max(1);
        self.config.legs_per_instruction = (min, max.max(min));
        self
    }

    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedRoute {
        let start = self
            .config
            .start_point
            .unwrap_or_else(|| self.config.bounds.random_point(rng));

        let points: Vec<RoutePoint> = self
            .generate_path(start, rng)
            .into_iter()
            .map(|(lat, lon)| RoutePoint {
                lat,
                lon,
                elevation: add_elevation_jitter(
                    self.elevation.elevation_at(lat, lon),
                    rng,
                    self.config.elevation_jitter_m,
                ),
            })
            .collect();

        let instructions = self.group_instructions(&points, rng);
        GeneratedRoute {
            points,
            instructions,
        }
    }

    /// Random walk with momentum, bounced back at the region edges.
    pub fn generate_path(&self, start: (f64, f64), rng: &mut impl Rng) -> Vec<(f64, f64)> {
        let mut path = vec![start];
        let mut current = start;
        let mut total_distance = 0.0;
        let mut heading = rng.gen_range(0.0..std::f64::consts::TAU);

        while total_distance < self.config.distance_meters {
            heading += rng.gen_range(-0.3..0.3);
            let step = self.config.point_spacing_m * rng.gen_range(0.8..1.2);

            // 1 degree of latitude is roughly 111 km
            let lat_delta = (step * heading.cos()) / 111_000.0;
            let lon_delta = (step * heading.sin()) / (111_000.0 * current.0.to_radians().cos());

            let (lat, lon, bounced) =
                self.apply_bounds(current.0 + lat_delta, current.1 + lon_delta, heading);
            heading = bounced;

            current = (lat, lon);
            path.push(current);
            total_distance += step;
        }

        path
    }

    fn apply_bounds(&self, lat: f64, lon: f64, heading: f64) -> (f64, f64, f64) {
        let b = &self.config.bounds;
        let mut new_heading = heading;

        let lat = if lat < b.min_lat {
            new_heading = std::f64::consts::PI - heading;
            b.min_lat + (b.min_lat - lat).min(0.001)
        } else if lat > b.max_lat {
            new_heading = std::f64::consts::PI - heading;
            b.max_lat - (lat - b.max_lat).min(0.001)
        } else {
            lat
        };

        let lon = if lon < b.min_lon {
            new_heading = -heading;
            b.min_lon + (b.min_lon - lon).min(0.001)
        } else if lon > b.max_lon {
            new_heading = -heading;
            b.max_lon - (lon - b.max_lon).min(0.001)
        } else {
            lon
        };

        (lat, lon, new_heading)
    }

    fn group_instructions(&self, points: &[RoutePoint], rng: &mut impl Rng) -> Vec<Instruction> {
        let Some(last) = points.len().checked_sub(1) else {
            return Vec::new();
        };

        let (min_legs, max_legs) = self.config.legs_per_instruction;
        let mut instructions = Vec::new();
        let mut from = 0;

        while from < last {
            let to = (from + rng.gen_range(min_legs..=max_legs)).min(last);
            let distance: f64 = points[from..=to]
                .windows(2)
                .map(|pair| pair[0].distance_to(&pair[1]))
                .sum();
            let text = if from == 0 {
                "Continue"
            } else {
                TURN_TEXTS[rng.gen_range(0..TURN_TEXTS.len())]
            };

            instructions.push(
                Instruction::new(distance, points[from].elevation)
                    .with_text(text)
                    .with_interval(from, to),
            );
            from = to;
        }

        instructions.push(
            Instruction::new(0.0, points[last].elevation)
                .with_text("Arrive at destination")
                .with_interval(last, last),
        );
        instructions
    }
}
