//! `info` command implementation.

use anyhow::{Context, Result};
use contracts::CorpusSource;
use ingestion::FileCorpusSource;
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Plan information for display
#[derive(Serialize)]
struct InfoReport {
    version: String,
    source: String,
    training: String,
    testing: String,
    ratio: f64,
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    corpus: Option<CorpusReport>,
}

/// Projected split sizes from an actual source read
#[derive(Serialize)]
struct CorpusReport {
    entries: usize,
    projected_training: usize,
    projected_testing: usize,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading plan information");

    let plan = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load plan from {}", args.config.display()))?;

    let corpus = if args.entries {
        let mut source = FileCorpusSource::new(&plan.source.path);
        let corpus = source
            .read()
            .context("Failed to read source corpus for entry counts")?;
        let boundary = plan.ratio()?.boundary(corpus.len());
        Some(CorpusReport {
            entries: corpus.len(),
            projected_training: boundary,
            projected_testing: corpus.len() - boundary,
        })
    } else {
        None
    };

    let report = InfoReport {
        version: format!("{:?}", plan.version),
        source: plan.source.path.display().to_string(),
        training: plan.outputs.training.display().to_string(),
        testing: plan.outputs.testing.display().to_string(),
        ratio: plan.split.ratio,
        seed: plan.split.seed,
        corpus,
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize plan info")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &InfoReport) {
    println!("Plan ({})", report.version);
    println!("  Source: {}", report.source);
    println!("  Training: {}", report.training);
    println!("  Testing: {}", report.testing);
    println!("  Ratio: {}", report.ratio);
    match report.seed {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: (thread RNG)"),
    }

    if let Some(ref corpus) = report.corpus {
        println!("\nCorpus");
        println!("  Entries: {}", corpus.entries);
        println!(
            "  Projected split: {} training / {} testing",
            corpus.projected_training, corpus.projected_testing
        );
    }
}
