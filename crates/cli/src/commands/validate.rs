//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<PlanSummary>,
}

#[derive(Serialize)]
struct PlanSummary {
    version: String,
    source: String,
    training: String,
    testing: String,
    ratio: f64,
    seed: Option<u64>,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating plan");

    let result = validate_plan(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Plan validation failed")
    }
}

fn validate_plan(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    // Check file exists
    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    // Try to load and validate
    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(plan) => {
            let warnings = collect_warnings(&plan);

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(PlanSummary {
                    version: format!("{:?}", plan.version),
                    source: plan.source.path.display().to_string(),
                    training: plan.outputs.training.display().to_string(),
                    testing: plan.outputs.testing.display().to_string(),
                    ratio: plan.split.ratio,
                    seed: plan.split.seed,
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect plan warnings (non-fatal issues)
fn collect_warnings(plan: &contracts::SplitPlan) -> Vec<String> {
    let mut warnings = Vec::new();

    if plan.split.ratio < 0.5 {
        warnings.push(format!(
            "ratio {} puts the training set below half the corpus",
            plan.split.ratio
        ));
    }

    if plan.split.seed.is_some() {
        warnings.push(
            "fixed seed configured - every run reproduces the same permutation".to_string(),
        );
    }

    if !plan.source.path.exists() {
        warnings.push(format!(
            "source '{}' does not exist yet - the split will fail until it does",
            plan.source.path.display()
        ));
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Plan is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  Source: {}", summary.source);
            println!("  Training: {}", summary.training);
            println!("  Testing: {}", summary.testing);
            println!("  Ratio: {}", summary.ratio);
            match summary.seed {
                Some(seed) => println!("  Seed: {}", seed),
                None => println!("  Seed: (thread RNG)"),
            }
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Plan is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn plan_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_validate_plan_collects_warnings() {
        let file = plan_file(
            r#"
[source]
path = "no-such-corpus.txt"

[split]
ratio = 0.3
seed = 1
"#,
        );
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
            json: false,
        };
        let result = validate_plan(&args);
        assert!(result.valid);
        let warnings = result.warnings.unwrap();
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_validate_plan_missing_file() {
        let args = ValidateArgs {
            config: "no/such/plan.toml".into(),
            json: false,
        };
        let result = validate_plan(&args);
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("File not found"));
    }

    #[test]
    fn test_validate_plan_invalid_ratio() {
        let file = plan_file(
            r#"
[source]
path = "words.txt"

[split]
ratio = 1.2
"#,
        );
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
            json: false,
        };
        let result = validate_plan(&args);
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("split.ratio"));
    }
}
