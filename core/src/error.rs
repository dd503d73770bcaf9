use std::io;
use std::path::PathBuf;

use thiserror::Error;

// Smallest grid that leaves room for the walk's 5-cell start margin
pub const MIN_WALK_DIMENSION: usize = 12;

// Rejected configuration, detected before any generation work starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("dimension {0} is not of the form 2^n + 1 (5, 9, 17, 33, ...)")]
    DimensionNotPowerOfTwoPlusOne(usize),
    #[error("dimension {dimension} is too small for the walk start margin (need at least {min})")]
    DimensionTooSmall { dimension: usize, min: usize },
    #[error("step range {0} is too small (need at least 2)")]
    StepRangeTooSmall(u32),
    #[error("step range {step_range} lets a reflected step leave a {dimension}x{dimension} grid")]
    StepRangeTooLarge { step_range: u32, dimension: usize },
    #[error("roughness {0} must be finite and non-negative")]
    InvalidRoughness(f32),
}

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read generator config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse generator config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid generator config: {0}")]
    Invalid(#[from] ConfigurationError),
}
