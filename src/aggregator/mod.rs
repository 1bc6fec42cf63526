//! Aggregation of parsed benchmark samples.
//!
//! This module transforms a stream of raw output lines into:
//! - A flat composite-keyed map of CPU times (last write wins)
//! - Two sorted axis sets (data sizes, cardinalities)
//! - Per-chart series views for the rendering stage

pub mod results;
pub mod views;

// Re-export main types and functions
pub use results::{aggregate, Aggregate, CardinalityFilter, SampleKey};
pub use views::{build_chart_data, ChartData, SeriesData};
