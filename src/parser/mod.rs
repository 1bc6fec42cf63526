//! Benchmark output parsing.
//!
//! This module handles:
//! - Matching raw output lines against the benchmark line grammar
//! - Translating data-type tokens into element sizes in bytes
//! - Extracting typed samples from matched lines

pub mod data_type;
pub mod line;

// Re-export main types
pub use data_type::DataType;
pub use line::{parse_line, BenchSample};
