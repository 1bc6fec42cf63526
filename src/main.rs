//! Benchgraph CLI
//!
//! Graphs the results of running container micro-benchmarks:
//! one "time vs. number of elements" chart per
//! (benchmark function, data size) pair, one curve per container type.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use benchgraph::commands::{
    execute_graph, execute_inspect, execute_sweep, validate_args, validate_sweep_args, GraphArgs,
    InspectArgs, SweepArgs,
};
use benchgraph::utils::config::DEFAULT_SWEEP_CUTOFFS;

/// Benchgraph - charts for container micro-benchmark results
#[derive(Parser, Debug)]
#[command(name = "benchgraph")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Graph benchmark results as SVG charts
    Graph {
        /// Path to the file that contains the benchmark output
        #[arg(short, long)]
        file: PathBuf,

        /// The minimum container size to graph; 0 for no minimum
        #[arg(long, default_value = "0")]
        min_elements: u64,

        /// The maximum container size to graph; 0 for no maximum
        #[arg(long, default_value = "0")]
        max_elements: u64,

        /// Output directory for chart files
        #[arg(short, long, default_value = "graphs")]
        out_dir: PathBuf,

        /// Chart width in pixels
        #[arg(long, default_value = "1000")]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value = "600")]
        height: u32,

        /// Also write a JSON report of the aggregate to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Render one chart set per maximum-container-size cutoff
    Sweep {
        /// Path to the file that contains the benchmark output
        #[arg(short, long)]
        file: PathBuf,

        /// Base output directory; each cutoff gets its own subdirectory
        #[arg(short, long, default_value = "graphs")]
        out_dir: PathBuf,

        /// Maximum container size cutoff (may be repeated; defaults to
        /// 64, 256, 1024, 16384)
        #[arg(long = "cutoff")]
        cutoffs: Vec<u64>,

        /// Chart width in pixels
        #[arg(long, default_value = "1000")]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value = "600")]
        height: u32,
    },

    /// Summarize parsed benchmark results without rendering
    Inspect {
        /// Path to the file that contains the benchmark output
        #[arg(short, long)]
        file: PathBuf,

        /// The minimum container size to include; 0 for no minimum
        #[arg(long, default_value = "0")]
        min_elements: u64,

        /// The maximum container size to include; 0 for no maximum
        #[arg(long, default_value = "0")]
        max_elements: u64,

        /// Print the full nested listing
        #[arg(long)]
        dump: bool,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Graph {
            file,
            min_elements,
            max_elements,
            out_dir,
            width,
            height,
            report,
            summary,
        } => {
            let args = GraphArgs {
                file,
                min_elements,
                max_elements,
                out_dir,
                width,
                height,
                report,
                summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_graph(args)?;
        }

        Commands::Sweep {
            file,
            out_dir,
            cutoffs,
            width,
            height,
        } => {
            let cutoffs = if cutoffs.is_empty() {
                DEFAULT_SWEEP_CUTOFFS.to_vec()
            } else {
                cutoffs
            };

            let args = SweepArgs {
                file,
                out_dir,
                cutoffs,
                width,
                height,
            };

            validate_sweep_args(&args)?;

            execute_sweep(args)?;
        }

        Commands::Inspect {
            file,
            min_elements,
            max_elements,
            dump,
        } => {
            let args = InspectArgs {
                file,
                min_elements,
                max_elements,
                dump,
            };

            execute_inspect(args)?;
        }
    }

    Ok(())
}
