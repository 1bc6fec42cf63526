//! Benchgraph
//!
//! Turns the text output of a container micro-benchmark run into
//! "time vs. number of elements" SVG charts: one curve per container
//! type, one chart per (benchmark function, data size) pair.
//!
//! This crate provides the core implementation for the
//! `benchgraph` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install benchgraph
//! benchgraph --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
