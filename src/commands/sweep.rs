//! Sweep command implementation.
//!
//! Renders the full chart set once per maximum-cardinality cutoff, each
//! set into its own subdirectory. Small-container curves are unreadable
//! on a chart whose axis runs to 16384 elements; a 64-element cutoff
//! chart answers "which container wins when I know it stays small."

use crate::aggregator::{aggregate, CardinalityFilter};
use crate::chart::ChartConfig;
use crate::commands::graph::write_chart_set;
use crate::commands::models::SweepArgs;
use crate::output::ensure_output_dir;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the sweep command
///
/// **Public** - main entry point called from main.rs
///
/// Each cutoff re-ingests the input with its own filter, so every chart
/// set's cardinality axis ends at its cutoff.
pub fn execute_sweep(args: SweepArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Reading benchmark output from: {}", args.file.display());
    let input = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read input file {}", args.file.display()))?;

    let config = ChartConfig::new()
        .with_width(args.width)
        .with_height(args.height);

    for &cutoff in &args.cutoffs {
        let filter = CardinalityFilter::new(None, Some(cutoff));
        let result = aggregate(input.lines(), &filter)
            .context("Failed to aggregate benchmark results")?;

        let dir = args.out_dir.join(format!("container_size_up_to_{}", cutoff));
        ensure_output_dir(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

        let written = write_chart_set(&result, &dir, &config)?;
        info!(
            "✓ Cutoff {}: {} charts written to {}",
            cutoff,
            written,
            dir.display()
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        "Sweep over {} cutoffs completed in {:.2}s",
        args.cutoffs.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

/// Validate sweep arguments
///
/// **Public** - can be called before execute_sweep for early validation
pub fn validate_sweep_args(args: &SweepArgs) -> Result<()> {
    if args.file.as_os_str().is_empty() {
        anyhow::bail!("Input file path cannot be empty");
    }

    if args.cutoffs.is_empty() {
        anyhow::bail!("At least one cutoff is required");
    }

    // 0 is reserved as the "no bound" sentinel and makes no sense as a cutoff
    if args.cutoffs.contains(&0) {
        anyhow::bail!("Cutoffs must be greater than 0");
    }

    if args.width == 0 || args.height == 0 {
        anyhow::bail!("Chart dimensions must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_sweep_args_valid() {
        let args = SweepArgs {
            file: PathBuf::from("output.txt"),
            ..Default::default()
        };

        assert!(validate_sweep_args(&args).is_ok());
    }

    #[test]
    fn test_validate_sweep_args_empty_file() {
        let args = SweepArgs::default();

        assert!(validate_sweep_args(&args).is_err());
    }

    #[test]
    fn test_validate_sweep_args_no_cutoffs() {
        let args = SweepArgs {
            file: PathBuf::from("output.txt"),
            cutoffs: vec![],
            ..Default::default()
        };

        assert!(validate_sweep_args(&args).is_err());
    }

    #[test]
    fn test_validate_sweep_args_zero_cutoff() {
        let args = SweepArgs {
            file: PathBuf::from("output.txt"),
            cutoffs: vec![64, 0],
            ..Default::default()
        };

        assert!(validate_sweep_args(&args).is_err());
    }
}
