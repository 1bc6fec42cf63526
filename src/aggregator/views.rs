//! Per-chart series views over the aggregate.
//!
//! The rendering stage draws one chart per (function, data size) pair
//! with one curve per container type. These views are derived in a
//! single ordered walk of the aggregate's composite-keyed map.

use super::results::Aggregate;
use log::debug;

/// One curve: a container type and its points along the global
/// cardinality axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesData {
    /// Container type label (legend entry)
    pub container: String,

    /// (cardinality, cpu time ns) pairs, one per global cardinality,
    /// in ascending axis order; unmeasured cardinalities appear as 0
    pub points: Vec<(u64, u64)>,
}

/// One chart: all curves for a (function, data size) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub function: String,
    pub data_size_bytes: u32,
    pub series: Vec<SeriesData>,
}

/// Group the aggregate by its (function, data size) prefix
///
/// **Public** - produces the rendering stage's input
///
/// Chart and series order follow the key order of the aggregate, so the
/// output is deterministic for a given input. Every series carries
/// exactly one point per global cardinality, zero-filled where that
/// container was never measured.
pub fn build_chart_data(aggregate: &Aggregate) -> Vec<ChartData> {
    let cardinalities = aggregate.cardinalities();
    let mut charts: Vec<ChartData> = Vec::new();

    // Keys arrive sorted by (function, size, container, cardinality),
    // so a change in prefix always starts a new chart or series.
    for key in aggregate.keys() {
        let same_chart = matches!(
            charts.last(),
            Some(c) if c.function == key.function && c.data_size_bytes == key.data_size_bytes
        );
        if !same_chart {
            charts.push(ChartData {
                function: key.function.clone(),
                data_size_bytes: key.data_size_bytes,
                series: Vec::new(),
            });
        }

        if let Some(chart) = charts.last_mut() {
            let same_series = matches!(
                chart.series.last(),
                Some(s) if s.container == key.container
            );
            if !same_series {
                let points = cardinalities
                    .iter()
                    .map(|&n| {
                        (
                            n,
                            aggregate.cpu_time(
                                &key.function,
                                key.data_size_bytes,
                                &key.container,
                                n,
                            ),
                        )
                    })
                    .collect();
                chart.series.push(SeriesData {
                    container: key.container.clone(),
                    points,
                });
            }
        }
    }

    debug!(
        "Built {} charts over {} cardinalities",
        charts.len(),
        cardinalities.len()
    );

    charts
}
