//! Line grammar for individual benchmark iterations.
//!
//! One matching line is one sample, e.g.:
//!
//! ```text
//! BM_vector_seq_read<Vector, int>/16    100 ns   90 ns   500000
//! ```
//!
//! Anything that does not match the grammar (headers, rule lines,
//! context banners) is treated as log noise and skipped without error.

use crate::parser::data_type::DataType;
use crate::utils::error::ParseError;
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

// Capture groups, left to right:
// 1: benchmark function name, e.g. BM_vector_seq_read
// 2: container type label, captured verbatim (may nest <>, commas, colons)
// 3: data type token, e.g. int or size_16
// 4: number of elements
// 5: clock time in ns (not retained)
// 6: CPU time in ns
// 7: iteration count (not retained)
static BENCHMARK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)<([\w<>,: ]+), (\w+)>/(\d+)\s+(\d+) ns\s+(\d+) ns\s+(\d+)$").unwrap()
});

/// One parsed benchmark iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchSample {
    /// Benchmark function name
    pub function: String,

    /// Container type label, opaque (never decomposed further)
    pub container: String,

    /// Size of one element in bytes, from the data-type token
    pub data_size_bytes: u32,

    /// Number of elements held by the container for this measurement
    pub cardinality: u64,

    /// Measured CPU time in nanoseconds
    pub cpu_time_ns: u64,
}

/// Parse a single line of benchmark output
///
/// **Public** - main entry point for line parsing
///
/// # Returns
/// * `Ok(Some(sample))` - line matched the grammar and all fields converted
/// * `Ok(None)` - line is not a benchmark iteration (skipped as noise)
///
/// # Errors
/// * `ParseError::UnknownDataType` - grammar matched but the data-type
///   token is not in the closed lookup
/// * `ParseError::Number` - a numeric field does not fit in `u64`
pub fn parse_line(line: &str) -> Result<Option<BenchSample>, ParseError> {
    let Some(caps) = BENCHMARK_LINE.captures(line) else {
        trace!("Skipping non-benchmark line: {}", line);
        return Ok(None);
    };

    let data_type: DataType = caps[3].parse()?;
    let cardinality: u64 = caps[4].parse()?;
    // Group 5 is wall-clock time; only the CPU column is retained.
    let cpu_time_ns: u64 = caps[6].parse()?;

    Ok(Some(BenchSample {
        function: caps[1].to_string(),
        container: caps[2].to_string(),
        data_size_bytes: data_type.size_bytes(),
        cardinality,
        cpu_time_ns,
    }))
}
