//! Terrain generation utilities.
//!
//! Elevation profiles come from fractal Perlin noise so that consecutive
//! route points climb and descend smoothly.

mod elevation;

pub use elevation::{ElevationGenerator, add_elevation_jitter};
