use thiserror::Error;

/// Errors raised while estimating segment or path energy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnergyError {
    #[error("Invalid traveler profile: {field} = {value}")]
    InvalidProfile { field: &'static str, value: f64 },

    #[error("Degenerate velocity {velocity} m/s at {percent_grade}% grade")]
    DegenerateVelocity { velocity: f64, percent_grade: f64 },

    #[error("Invalid instruction {index}: {reason}")]
    InvalidInstruction { index: usize, reason: String },

    #[error("Load of {0} kg is too heavy to be carried")]
    LoadTooHeavy(f64),

    #[error("Energy for an edge should never be negative (got {0} kcal)")]
    NegativeEnergy(f64),
}

impl EnergyError {
    /// Attaches an instruction index to errors that were raised without one.
    pub(crate) fn at_instruction(self, index: usize) -> Self {
        match self {
            EnergyError::InvalidInstruction { reason, .. } => {
                EnergyError::InvalidInstruction { index, reason }
            }
            other => other,
        }
    }
}

/// Errors raised while turning route files into instructions.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to parse GPX file: {0}")]
    Gpx(String),

    #[error("Failed to parse routing response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Routing response contains no paths")]
    NoPath,

    #[error("Point {0} has no elevation")]
    MissingElevation(usize),

    #[error("Instruction {index} references point {point}, but the path has {len} points")]
    IntervalOutOfRange {
        index: usize,
        point: usize,
        len: usize,
    },

    #[error("Unsupported input file: {0}")]
    UnsupportedFile(String),
}

/// Errors raised while loading estimator configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },

    #[error(transparent)]
    Profile(#[from] EnergyError),
}
