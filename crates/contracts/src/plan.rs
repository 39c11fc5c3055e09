//! SplitPlan - Config Loader output
//!
//! Describes one complete partition run: source corpus, split parameters,
//! output routing.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

use crate::{SplitError, SplitRatio};

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete partition run blueprint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SplitPlan {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Source corpus settings
    pub source: SourceConfig,

    /// Split parameters
    #[serde(default)]
    #[validate(nested)]
    pub split: SplitConfig,

    /// Output routing
    #[serde(default)]
    pub outputs: OutputConfig,
}

impl SplitPlan {
    /// Validated split ratio for this plan.
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidRatio`] when `split.ratio` is outside (0, 1).
    pub fn ratio(&self) -> Result<SplitRatio, SplitError> {
        SplitRatio::new(self.split.ratio)
    }
}

/// Source corpus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the newline-delimited corpus file
    pub path: PathBuf,
}

/// Split parameters
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SplitConfig {
    /// Training fraction, must be strictly between 0 and 1
    #[serde(default = "default_ratio")]
    #[validate(range(
        exclusive_min = 0.0,
        exclusive_max = 1.0,
        message = "ratio must be strictly between 0 and 1"
    ))]
    pub ratio: f64,

    /// Fixed shuffle seed; omitted = fresh thread RNG per run
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            ratio: default_ratio(),
            seed: None,
        }
    }
}

fn default_ratio() -> f64 {
    0.8
}

/// Output routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Training sink path, overwritten on each run
    #[serde(default = "default_training_path")]
    pub training: PathBuf,

    /// Testing sink path, overwritten on each run
    #[serde(default = "default_testing_path")]
    pub testing: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            training: default_training_path(),
            testing: default_testing_path(),
        }
    }
}

fn default_training_path() -> PathBuf {
    PathBuf::from("training.txt")
}

fn default_testing_path() -> PathBuf {
    PathBuf::from("testing.txt")
}
