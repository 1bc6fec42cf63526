//! Graph command implementation.
//!
//! The graph command:
//! 1. Reads the benchmark output file
//! 2. Aggregates matching lines under the cardinality bounds
//! 3. Renders one chart per (function, data size) pair
//! 4. Writes the SVG files (and optionally a JSON report)

use crate::aggregator::{aggregate, build_chart_data, Aggregate, CardinalityFilter};
use crate::chart::{render_chart, ChartConfig};
use crate::commands::inspect::render_summary;
use crate::commands::models::GraphArgs;
use crate::output::{chart_file_name, ensure_output_dir, write_report, write_svg, Report};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;
use std::time::Instant;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file unreadable
/// * Unknown data-type token anywhere in the input (fatal by design)
/// * Chart rendering or file write failures
pub fn execute_graph(args: GraphArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Reading benchmark output from: {}", args.file.display());
    let input = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read input file {}", args.file.display()))?;

    let filter = CardinalityFilter::from_bounds(args.min_elements, args.max_elements);
    debug!("Cardinality filter: {:?}", filter);

    let result = aggregate(input.lines(), &filter)
        .context("Failed to aggregate benchmark results")?;

    if result.is_empty() {
        warn!(
            "No benchmark lines matched in {}; no charts will be rendered",
            args.file.display()
        );
    }

    ensure_output_dir(&args.out_dir).context("Failed to create output directory")?;

    let config = ChartConfig::new()
        .with_width(args.width)
        .with_height(args.height);

    let written = write_chart_set(&result, &args.out_dir, &config)?;
    info!("✓ {} charts written to: {}", written, args.out_dir.display());

    if let Some(report_path) = &args.report {
        let report = Report::from_aggregate(&result, args.file.display().to_string());
        write_report(&report, report_path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", report_path.display());
    }

    if args.summary {
        println!("{}", render_summary(&result));
    }

    let elapsed = start_time.elapsed();
    info!("Graphing completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Render and write every chart of an aggregate into a directory
///
/// **Public** - shared with the sweep command
///
/// Returns the number of chart files written.
pub fn write_chart_set(
    result: &Aggregate,
    out_dir: &Path,
    config: &ChartConfig,
) -> Result<usize> {
    let charts = build_chart_data(result);
    debug!("Rendering {} charts to {}", charts.len(), out_dir.display());

    for chart in &charts {
        let svg = render_chart(chart, config).with_context(|| {
            format!(
                "Failed to render chart for {} at {} bytes",
                chart.function, chart.data_size_bytes
            )
        })?;

        let path = out_dir.join(chart_file_name(&chart.function, chart.data_size_bytes));
        write_svg(&svg, &path)
            .with_context(|| format!("Failed to write chart {}", path.display()))?;
    }

    Ok(charts.len())
}

/// Validate graph arguments
///
/// **Public** - can be called before execute_graph for early validation
pub fn validate_args(args: &GraphArgs) -> Result<()> {
    if args.file.as_os_str().is_empty() {
        anyhow::bail!("Input file path cannot be empty");
    }

    // 0 means "no bound", so only check when both are real bounds
    if args.min_elements != 0 && args.max_elements != 0 && args.min_elements > args.max_elements {
        anyhow::bail!(
            "min_elements ({}) cannot exceed max_elements ({})",
            args.min_elements,
            args.max_elements
        );
    }

    if args.width == 0 || args.height == 0 {
        anyhow::bail!("Chart dimensions must be greater than 0");
    }

    Ok(())
}
