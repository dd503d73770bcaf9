use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigFileError, ConfigurationError, MIN_WALK_DIMENSION};

// Everything `generate` consumes. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub dimension: usize, // must be 2^n + 1 and at least 17
    pub steps: usize,
    pub step_range: u32, // step distance is drawn from [1, step_range)
    pub scale: f32,      // rendering only, the algorithms ignore it
    pub use_random_seed: bool,
    pub seed: String,
    pub elevation: bool,
    pub roughness: f32, // jitter amplitude for diamond-square
    pub mark_endpoints: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dimension: 33,
            steps: 25,
            step_range: 5,
            scale: 1.0,
            use_random_seed: true,
            seed: String::new(),
            elevation: true,
            roughness: 5.0,
            mark_endpoints: false,
        }
    }
}

impl GeneratorConfig {
    // Fixed-seed config, the usual starting point for reproducible runs
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            use_random_seed: false,
            seed: seed.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_dimension(self.dimension)?;
        if self.dimension < MIN_WALK_DIMENSION {
            return Err(ConfigurationError::DimensionTooSmall {
                dimension: self.dimension,
                min: MIN_WALK_DIMENSION,
            });
        }
        validate_step_range(self.step_range, self.dimension)?;
        if !self.roughness.is_finite() || self.roughness < 0.0 {
            return Err(ConfigurationError::InvalidRoughness(self.roughness));
        }
        Ok(())
    }

    // The seed string that will actually drive the generator.
    // Random seeds are derived from the wall clock so they can be logged and replayed.
    pub fn resolve_seed(&self) -> String {
        if self.use_random_seed {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            format!("{}.{:09}", now.as_secs(), now.subsec_nanos())
        } else {
            self.seed.clone()
        }
    }

    // Parse only. Presets may be completed by later overrides, so nothing is checked here.
    pub fn parse_json_str(json: &str) -> Result<Self, ConfigFileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigFileError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigFileError> {
        let config = Self::parse_json_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigFileError> {
        let config = Self::load_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

pub fn validate_dimension(dimension: usize) -> Result<(), ConfigurationError> {
    if dimension >= 3 && (dimension - 1).is_power_of_two() {
        Ok(())
    } else {
        Err(ConfigurationError::DimensionNotPowerOfTwoPlusOne(dimension))
    }
}

// A step of length d reflected off one edge stays on the grid only while d <= dimension / 2
pub fn validate_step_range(step_range: u32, dimension: usize) -> Result<(), ConfigurationError> {
    if step_range < 2 {
        return Err(ConfigurationError::StepRangeTooSmall(step_range));
    }
    if (step_range - 1) as usize > dimension / 2 {
        return Err(ConfigurationError::StepRangeTooLarge {
            step_range,
            dimension,
        });
    }
    Ok(())
}
