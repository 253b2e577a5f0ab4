//! Energy and time estimation for walking route itineraries.
//!
//! Each instruction of a computed path is turned into a kilocalorie cost and
//! a traversal time from its distance and elevation change, and the costs are
//! accumulated into a running total.
//!
//! ```rust,ignore
//! use trail_energy::prelude::*;
//!
//! let instructions = vec![Instruction::new(100.0, 10.0), Instruction::new(0.0, 12.0)];
//! let estimate = estimate_path(&instructions, &TravelerProfile::default())?;
//! println!("{:.2} kcal", estimate.total_kcal);
//! ```

pub mod aggregator;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod grade;
pub mod metabolic;
pub mod models;
pub mod path;
pub mod profile;
pub mod report;
pub mod segment;
pub mod sources;
pub mod weighting;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::aggregator::{PathMetric, PathTotals, RunningTotal};
    pub use crate::config::EstimatorConfig;
    pub use crate::diagnostics::Diagnostics;
    pub use crate::errors::{ConfigError, EnergyError, SourceError};
    pub use crate::models::{Instruction, SegmentResult};
    pub use crate::path::{
        ErrorPolicy, PathEstimate, PathEstimator, SegmentEntry, TerminalDelta, estimate_path,
        estimate_path_parallel,
    };
    pub use crate::profile::{Sex, Terrain, TravelerProfile};
    pub use crate::segment::{SegmentEstimate, estimate_segment, estimate_segment_detailed};
    pub use crate::sources::load_instructions;
    pub use crate::weighting::{BeelineApproximator, CalorieWeighting, Weighting};
}
