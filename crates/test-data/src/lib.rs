//! Test data generation for trail-energy.
//!
//! Synthetic walking routes over Perlin-noise terrain, traveler presets,
//! and route fixtures in the formats the estimator reads.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let route = RouteGenerator::for_region(Region::SIERRA, 7)
//!     .with_distance(5000.0)
//!     .generate(&mut rng);
//! let traveler = sample_traveler(TravelerPreset::Backpacker, &mut rng);
//! let estimate = estimate_path(&route.instructions, &traveler)?;
//! ```

pub mod config;
pub mod fixtures;
pub mod gpx;
pub mod profiles;
pub mod sources;
pub mod terrain;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BoundingBox, Region};
    pub use crate::fixtures::{FixtureFormat, routing_response, write_route};
    pub use crate::gpx::{GpxLayout, generate_gpx};
    pub use crate::profiles::{TravelerPreset, sample_traveler};
    pub use crate::sources::{GeneratedRoute, RouteConfig, RouteGenerator, RoutePoint};
    pub use crate::terrain::ElevationGenerator;
    pub use trail_energy::prelude::*;
}
