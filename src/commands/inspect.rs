//! Inspect command implementation.
//!
//! Parses and aggregates a benchmark output file without rendering,
//! then prints a short summary and optionally the full nested listing.
//! Useful for checking what the grammar actually matched before
//! spending time on charts.

use crate::aggregator::{aggregate, Aggregate, CardinalityFilter};
use crate::commands::models::InspectArgs;
use anyhow::{Context, Result};
use log::info;
use std::fmt::Write;

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    info!("Reading benchmark output from: {}", args.file.display());
    let input = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read input file {}", args.file.display()))?;

    let filter = CardinalityFilter::from_bounds(args.min_elements, args.max_elements);
    let result = aggregate(input.lines(), &filter)
        .context("Failed to aggregate benchmark results")?;

    println!("{}", render_summary(&result));

    if args.dump {
        println!();
        println!("{}", render_dump(&result));
    }

    Ok(())
}

/// Short text summary of an aggregate
///
/// **Public** - shared with the graph command's --summary flag
pub fn render_summary(result: &Aggregate) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Samples:          {}", result.len());
    let _ = writeln!(out, "Functions:        {}", result.functions().join(", "));
    let _ = writeln!(
        out,
        "Container types:  {}",
        result.container_types().join(", ")
    );
    let _ = writeln!(
        out,
        "Data sizes (B):   {}",
        join_numbers(&result.sizes_in_bytes())
    );
    let _ = write!(
        out,
        "Cardinalities:    {}",
        join_numbers(&result.cardinalities())
    );

    out
}

/// Full nested listing of an aggregate
///
/// **Public** - the --dump output
///
/// Format: function, then data size, then container, then one
/// `cardinality: cpu ns` line per measurement, in key order.
pub fn render_dump(result: &Aggregate) -> String {
    let mut out = String::new();
    let mut last_function: Option<&str> = None;
    let mut last_size: Option<u32> = None;
    let mut last_container: Option<&str> = None;

    for (key, cpu_time_ns) in result.samples() {
        if last_function != Some(key.function.as_str()) {
            let _ = writeln!(out, "{}:", key.function);
            last_function = Some(key.function.as_str());
            last_size = None;
            last_container = None;
        }
        if last_size != Some(key.data_size_bytes) {
            let _ = writeln!(out, "\tData size {}", key.data_size_bytes);
            last_size = Some(key.data_size_bytes);
            last_container = None;
        }
        if last_container != Some(key.container.as_str()) {
            let _ = writeln!(out, "\t\t{}", key.container);
            last_container = Some(key.container.as_str());
        }
        let _ = writeln!(out, "\t\t\t{}: {}", key.cardinality, cpu_time_ns);
    }

    // Drop the trailing newline so callers control spacing
    while out.ends_with('\n') {
        out.pop();
    }

    out
}

fn join_numbers<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
