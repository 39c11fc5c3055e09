//! Configuration validation module
//!
//! Validation rules:
//! - split.ratio strictly inside (0, 1)
//! - source path non-empty
//! - output paths non-empty and distinct from each other
//! - source path distinct from both outputs (a split must never clobber its corpus)

use ::validator::Validate;
use contracts::{SplitError, SplitPlan};

/// Validate a SplitPlan configuration
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(plan: &SplitPlan) -> Result<(), SplitError> {
    validate_ratio(plan)?;
    validate_source(plan)?;
    validate_outputs(plan)?;
    Ok(())
}

/// Derive-based range rules (split.ratio)
fn validate_ratio(plan: &SplitPlan) -> Result<(), SplitError> {
    plan.validate().map_err(|errors| {
        SplitError::config_validation("split.ratio", errors.to_string().trim().to_string())
    })
}

/// Validate the source path
fn validate_source(plan: &SplitPlan) -> Result<(), SplitError> {
    if plan.source.path.as_os_str().is_empty() {
        return Err(SplitError::config_validation(
            "source.path",
            "source path cannot be empty",
        ));
    }
    Ok(())
}

/// Validate output routing
fn validate_outputs(plan: &SplitPlan) -> Result<(), SplitError> {
    let training = &plan.outputs.training;
    let testing = &plan.outputs.testing;

    if training.as_os_str().is_empty() {
        return Err(SplitError::config_validation(
            "outputs.training",
            "training path cannot be empty",
        ));
    }
    if testing.as_os_str().is_empty() {
        return Err(SplitError::config_validation(
            "outputs.testing",
            "testing path cannot be empty",
        ));
    }
    if training == testing {
        return Err(SplitError::config_validation(
            "outputs.training / outputs.testing",
            format!(
                "training and testing must be distinct paths, both are '{}'",
                training.display()
            ),
        ));
    }
    for (field, output) in [("outputs.training", training), ("outputs.testing", testing)] {
        if output == &plan.source.path {
            return Err(SplitError::config_validation(
                field,
                format!(
                    "output path '{}' would overwrite the source corpus",
                    output.display()
                ),
            ));
        }
    }
    Ok(())
}
