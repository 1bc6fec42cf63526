//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Default chart dimensions in pixels
pub const DEFAULT_CHART_WIDTH: u32 = 1000;
pub const DEFAULT_CHART_HEIGHT: u32 = 600;

// Default maximum-cardinality cutoffs for the sweep command.
// One chart set is rendered per cutoff so that small containers stay
// readable instead of being flattened against the 16384-element curves.
pub const DEFAULT_SWEEP_CUTOFFS: &[u64] = &[64, 256, 1024, 16384];
