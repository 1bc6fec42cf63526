//! Renders one "time vs. number of elements" chart to an SVG string.

use super::ChartConfig;
use crate::aggregator::ChartData;
use anyhow::{bail, Result};
use log::info;
use plotters::prelude::*;

/// Render a single chart as an SVG document
///
/// **Public** - main entry point for chart rendering
///
/// One lines+markers curve per container type, x axis in elements,
/// y axis in nanoseconds, legend naming each container.
///
/// # Errors
/// Fails if the chart has no series, or if plotters fails to draw.
pub fn render_chart(chart_data: &ChartData, config: &ChartConfig) -> Result<String> {
    if chart_data.series.is_empty() {
        bail!(
            "Chart for {} has no series",
            chart_data.function
        );
    }

    let caption = format!(
        "{}() Time (at {} Byte Data Size) by Number of Elements",
        chart_data.function, chart_data.data_size_bytes
    );

    // Axes are linear and zero-based; pad degenerate ranges so a chart
    // of all-zero times or a single cardinality still renders.
    let x_max = chart_data
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.0))
        .max()
        .unwrap_or(0)
        .max(1);
    let y_max = chart_data
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.1))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&caption, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(0u64..x_max, 0u64..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Number of Elements")
            .y_desc("Time (nanoseconds)")
            .draw()?;

        for (i, series) in chart_data.series.iter().enumerate() {
            let color = Palette99::pick(i).mix(1.0);
            chart
                .draw_series(LineSeries::new(series.points.iter().copied(), &color))?
                .label(series.container.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            chart.draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, 3, color.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
    }

    info!(
        "Rendered chart for {} at {} bytes ({} series, {} bytes of SVG)",
        chart_data.function,
        chart_data.data_size_bytes,
        chart_data.series.len(),
        svg.len()
    );

    Ok(svg)
}
