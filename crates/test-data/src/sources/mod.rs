//! Synthetic route sources.
//!
//! [`RouteGenerator`] walks a random heading through a region, samples
//! elevation along the way and groups the points into turn instructions.

mod procedural;

pub use procedural::{GeneratedRoute, RouteConfig, RouteGenerator, RoutePoint};
