//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Generate `SplitPlan`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let plan = ConfigLoader::load_from_path(Path::new("split.toml")).unwrap();
//! println!("Source: {}", plan.source.path.display());
//! ```

mod parser;
mod validator;

pub use contracts::SplitPlan;
pub use parser::ConfigFormat;
pub use self::validator::validate;

use contracts::SplitError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<SplitPlan, SplitError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<SplitPlan, SplitError> {
        Self::parse_and_validate(content, format)
    }

    /// Serialize SplitPlan to TOML string
    pub fn to_toml(plan: &SplitPlan) -> Result<String, SplitError> {
        toml::to_string_pretty(plan)
            .map_err(|e| SplitError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize SplitPlan to JSON string
    pub fn to_json(plan: &SplitPlan) -> Result<String, SplitError> {
        serde_json::to_string_pretty(plan)
            .map_err(|e| SplitError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, SplitError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            SplitError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext)
            .ok_or_else(|| SplitError::config_parse(format!("unsupported config format: .{ext}")))
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, SplitError> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Parse and validate configuration content
    fn parse_and_validate(content: &str, format: ConfigFormat) -> Result<SplitPlan, SplitError> {
        let plan = parser::parse(content, format)?;
        validator::validate(&plan)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TOML: &str = r#"
[source]
path = "words.txt"

[split]
ratio = 0.8
seed = 7

[outputs]
training = "training.txt"
testing = "testing.txt"
"#;

    #[test]
    fn test_load_from_str_toml() {
        let result = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let plan = result.unwrap();
        assert_eq!(plan.source.path.to_str(), Some("words.txt"));
        assert_eq!(plan.split.seed, Some(7));
    }

    #[test]
    fn test_load_applies_section_defaults() {
        let content = r#"
[source]
path = "words.txt"
"#;
        let plan = ConfigLoader::load_from_str(content, ConfigFormat::Toml).unwrap();
        assert_eq!(plan.split.ratio, 0.8);
        assert!(plan.split.seed.is_none());
        assert_eq!(plan.outputs.training.to_str(), Some("training.txt"));
        assert_eq!(plan.outputs.testing.to_str(), Some("testing.txt"));
    }

    #[test]
    fn test_round_trip_toml() {
        let plan = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let serialized = ConfigLoader::to_toml(&plan).unwrap();
        let plan2 = ConfigLoader::load_from_str(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(plan.source.path, plan2.source.path);
        assert_eq!(plan.split.ratio, plan2.split.ratio);
        assert_eq!(plan.outputs.testing, plan2.outputs.testing);
    }

    #[test]
    fn test_round_trip_json() {
        let plan = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let json = ConfigLoader::to_json(&plan).unwrap();
        let plan2 = ConfigLoader::load_from_str(&json, ConfigFormat::Json).unwrap();
        assert_eq!(plan.source.path, plan2.source.path);
    }

    #[test]
    fn test_validation_runs_after_parse() {
        // Training and testing routed to the same file should fail validation
        let content = r#"
[source]
path = "words.txt"

[outputs]
training = "same.txt"
testing = "same.txt"
"#;
        let result = ConfigLoader::load_from_str(content, ConfigFormat::Toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("distinct"));
    }
}
