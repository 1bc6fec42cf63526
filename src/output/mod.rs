//! Output writers for charts and reports.
//!
//! This module handles writing data to disk:
//! - SVG chart files, one per (function, data size) pair
//! - JSON reports of the aggregate
//! - Output directory management

pub mod json;
pub mod svg;

// Re-export main functions
pub use json::{read_report, write_report, Report, SampleRow};
pub use svg::write_svg;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Validate that a path can be written to
///
/// **Public** - shared by the writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create the chart output directory if it does not exist
///
/// **Public** - called before writing a chart set
///
/// Idempotent: an already-existing directory is success, not an error.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> Result<(), OutputError> {
    let dir = dir.as_ref();

    if dir.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if dir.exists() && !dir.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }

    debug!("Ensuring output directory: {}", dir.display());
    std::fs::create_dir_all(dir).map_err(OutputError::WriteFailed)?;

    Ok(())
}

/// Deterministic chart file name for a (function, data size) pair
pub fn chart_file_name(function: &str, data_size_bytes: u32) -> String {
    format!("{}_data_size_{}.svg", function, data_size_bytes)
}
