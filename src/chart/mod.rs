//! SVG line chart rendering using the plotters library.
//!
//! This module is a thin wrapper around plotters: it consumes the
//! aggregator's chart views and produces SVG documents as strings.
//! It knows nothing about file paths or output directories.

pub mod line_chart;

// Re-export main types
pub use line_chart::render_chart;

use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};

/// Chart rendering configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }
}
