//! JSON report output writer.
//!
//! The report is a serialized view of the aggregate: the flattened
//! samples plus the axis sets and a generation timestamp. It is never
//! reloaded as program state; `read_report` exists for round-trip
//! tests and downstream tooling.

use super::validate_path;
use crate::aggregator::Aggregate;
use crate::utils::config::REPORT_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// One flattened measurement in the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleRow {
    pub function: String,
    pub container: String,
    pub data_size_bytes: u32,
    pub cardinality: u64,
    pub cpu_time_ns: u64,
}

/// Serializable view of an aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (e.g., "1.0.0")
    pub version: String,

    /// Where the benchmark output came from
    pub source: String,

    /// Number of stored samples
    pub sample_count: usize,

    /// Distinct benchmark function names, sorted
    pub functions: Vec<String>,

    /// Data-size axis, ascending
    pub sizes_in_bytes: Vec<u32>,

    /// Cardinality axis, ascending
    pub cardinalities: Vec<u64>,

    /// Flattened samples in key order
    pub samples: Vec<SampleRow>,

    /// RFC 3339 generation timestamp
    pub generated_at: String,
}

impl Report {
    /// Build a report from a fully-populated aggregate
    pub fn from_aggregate(aggregate: &Aggregate, source: impl Into<String>) -> Self {
        let samples = aggregate
            .samples()
            .map(|(key, cpu_time_ns)| SampleRow {
                function: key.function.clone(),
                container: key.container.clone(),
                data_size_bytes: key.data_size_bytes,
                cardinality: key.cardinality,
                cpu_time_ns,
            })
            .collect();

        Self {
            version: REPORT_VERSION.to_string(),
            source: source.into(),
            sample_count: aggregate.len(),
            functions: aggregate.functions(),
            sizes_in_bytes: aggregate.sizes_in_bytes(),
            cardinalities: aggregate.cardinalities(),
            samples,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} samples)",
        report.sample_count
    );

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - useful for round-trip tests and downstream tooling
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let report: Report = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} samples",
        report.version, report.sample_count
    );

    Ok(report)
}
