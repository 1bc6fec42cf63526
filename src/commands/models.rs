//! Argument structs for the CLI commands.

use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_SWEEP_CUTOFFS};
use std::path::PathBuf;

/// Arguments for the graph command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Path to the file that contains the benchmark output
    pub file: PathBuf,

    /// Minimum container size to graph; 0 for no minimum
    pub min_elements: u64,

    /// Maximum container size to graph; 0 for no maximum
    pub max_elements: u64,

    /// Directory chart files are written into
    pub out_dir: PathBuf,

    /// Chart width in pixels
    pub width: u32,

    /// Chart height in pixels
    pub height: u32,

    /// Optional path for a JSON report of the aggregate
    pub report: Option<PathBuf>,

    /// Print text summary to stdout
    pub summary: bool,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            min_elements: 0,
            max_elements: 0,
            out_dir: PathBuf::from("graphs"),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            report: None,
            summary: false,
        }
    }
}

/// Arguments for the sweep command
#[derive(Debug, Clone)]
pub struct SweepArgs {
    /// Path to the file that contains the benchmark output
    pub file: PathBuf,

    /// Base directory; each cutoff gets its own subdirectory
    pub out_dir: PathBuf,

    /// Maximum-cardinality cutoffs, one chart set per cutoff
    pub cutoffs: Vec<u64>,

    /// Chart width in pixels
    pub width: u32,

    /// Chart height in pixels
    pub height: u32,
}

impl Default for SweepArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            out_dir: PathBuf::from("graphs"),
            cutoffs: DEFAULT_SWEEP_CUTOFFS.to_vec(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Path to the file that contains the benchmark output
    pub file: PathBuf,

    /// Minimum container size to include; 0 for no minimum
    pub min_elements: u64,

    /// Maximum container size to include; 0 for no maximum
    pub max_elements: u64,

    /// Print the full nested listing
    pub dump: bool,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            min_elements: 0,
            max_elements: 0,
            dump: false,
        }
    }
}
