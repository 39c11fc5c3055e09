//! `split` command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::SplitArgs;
use crate::pipeline::{SplitRun, SplitRunConfig};

/// Execute the `split` command
pub fn run_split(args: &SplitArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading split plan");

    // Validate config path
    if !args.config.exists() {
        anyhow::bail!("Plan file not found: {}", args.config.display());
    }

    // Load and parse the plan
    let mut plan = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load plan from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(ref source) = args.source {
        info!(source = %source.display(), "Overriding source path from CLI");
        plan.source.path = source.clone();
    }
    if let Some(ref training) = args.training {
        info!(training = %training.display(), "Overriding training path from CLI");
        plan.outputs.training = training.clone();
    }
    if let Some(ref testing) = args.testing {
        info!(testing = %testing.display(), "Overriding testing path from CLI");
        plan.outputs.testing = testing.clone();
    }
    if let Some(ratio) = args.ratio {
        info!(ratio, "Overriding split ratio from CLI");
        plan.split.ratio = ratio;
    }
    if let Some(seed) = args.seed {
        info!(seed, "Overriding shuffle seed from CLI");
        plan.split.seed = Some(seed);
    }

    // Overrides can invalidate a previously valid plan
    config_loader::validate(&plan).context("Plan invalid after CLI overrides")?;

    info!(
        source = %plan.source.path.display(),
        training = %plan.outputs.training.display(),
        testing = %plan.outputs.testing.display(),
        ratio = plan.split.ratio,
        seeded = plan.split.seed.is_some(),
        "Plan loaded"
    );

    // Run the partition
    let run = SplitRun::new(SplitRunConfig {
        plan,
        dry_run: args.dry_run,
    });
    let stats = run.run().context("Split run failed")?;

    stats.print_summary();
    println!(
        "✓ Corpus split complete: {} entries → {} training / {} testing",
        stats.entries_read, stats.training_written, stats.testing_written
    );

    Ok(())
}
