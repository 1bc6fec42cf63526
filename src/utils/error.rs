//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing benchmark output lines.
///
/// Lines that simply do not match the benchmark grammar are not errors;
/// `parse_line` returns `Ok(None)` for those. These variants cover lines
/// that matched the grammar but carry data we cannot accept.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown data type token: {0}")]
    UnknownDataType(String),

    #[error("Numeric field out of range: {0}")]
    Number(#[from] std::num::ParseIntError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
