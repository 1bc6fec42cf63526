//! Sample aggregation into a flat composite-keyed map.
//!
//! Conceptually the data is a four-level nested mapping
//! (function -> data size -> container -> cardinality -> cpu time),
//! but it is stored as a single `BTreeMap` keyed by the composite
//! tuple, which keeps iteration sorted and avoids default-valued
//! nested containers.

use crate::parser::{parse_line, BenchSample};
use crate::utils::error::ParseError;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Composite key for one stored measurement.
///
/// Field order matters: the derived `Ord` sorts by function, then data
/// size, then container, then cardinality, which is the grouping order
/// the chart views rely on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SampleKey {
    pub function: String,
    pub data_size_bytes: u32,
    pub container: String,
    pub cardinality: u64,
}

impl SampleKey {
    pub fn new(
        function: impl Into<String>,
        data_size_bytes: u32,
        container: impl Into<String>,
        cardinality: u64,
    ) -> Self {
        Self {
            function: function.into(),
            data_size_bytes,
            container: container.into(),
            cardinality,
        }
    }
}

impl From<&BenchSample> for SampleKey {
    fn from(sample: &BenchSample) -> Self {
        Self {
            function: sample.function.clone(),
            data_size_bytes: sample.data_size_bytes,
            container: sample.container.clone(),
            cardinality: sample.cardinality,
        }
    }
}

/// Inclusive cardinality bounds applied at ingestion time
///
/// `None` means no bound on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardinalityFilter {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl CardinalityFilter {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// No bounds on either side
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a filter from the CLI's `0 = unset` convention.
    ///
    /// `0` is reserved as the "no bound" sentinel on the command line,
    /// so it maps to `None` here. Library callers that need a real
    /// bound use [`CardinalityFilter::new`] directly.
    pub fn from_bounds(min: u64, max: u64) -> Self {
        Self {
            min: (min != 0).then_some(min),
            max: (max != 0).then_some(max),
        }
    }

    /// Whether a record with this cardinality is kept (bounds inclusive)
    pub fn accepts(&self, cardinality: u64) -> bool {
        self.min.map_or(true, |min| cardinality >= min)
            && self.max.map_or(true, |max| cardinality <= max)
    }
}

/// The fully-populated aggregate: composite-keyed CPU times plus the
/// two global axis sets.
///
/// Built once per invocation and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    samples: BTreeMap<SampleKey, u64>,
    sizes: BTreeSet<u32>,
    cardinalities: BTreeSet<u64>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one sample, overwriting any prior value at the same key.
    ///
    /// The axis sets are updated unconditionally, so a cardinality seen
    /// for one container still appears on the global axis even if other
    /// containers were never measured at it.
    pub fn insert(&mut self, sample: BenchSample) {
        self.sizes.insert(sample.data_size_bytes);
        self.cardinalities.insert(sample.cardinality);
        self.samples.insert(SampleKey::from(&sample), sample.cpu_time_ns);
    }

    /// CPU time stored at this key, or `0` when never measured.
    ///
    /// Absence is deliberately represented as zero time rather than a
    /// missing-key error; the chart stage plots unmeasured points at 0.
    pub fn get(&self, key: &SampleKey) -> u64 {
        self.samples.get(key).copied().unwrap_or(0)
    }

    /// Convenience lookup by field values (missing key = 0)
    pub fn cpu_time(
        &self,
        function: &str,
        data_size_bytes: u32,
        container: &str,
        cardinality: u64,
    ) -> u64 {
        self.get(&SampleKey::new(function, data_size_bytes, container, cardinality))
    }

    /// Data-size axis, ascending, no duplicates
    pub fn sizes_in_bytes(&self) -> Vec<u32> {
        self.sizes.iter().copied().collect()
    }

    /// Cardinality axis, ascending, no duplicates
    pub fn cardinalities(&self) -> Vec<u64> {
        self.cardinalities.iter().copied().collect()
    }

    /// Distinct benchmark function names, sorted
    pub fn functions(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for key in self.samples.keys() {
            // Keys arrive sorted by function first
            if out.last() != Some(&key.function) {
                out.push(key.function.clone());
            }
        }
        out
    }

    /// Distinct container type labels, sorted
    pub fn container_types(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.samples.keys().map(|k| k.container.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Ordered iteration over stored keys
    pub fn keys(&self) -> impl Iterator<Item = &SampleKey> {
        self.samples.keys()
    }

    /// Ordered iteration over (key, cpu time) pairs
    pub fn samples(&self) -> impl Iterator<Item = (&SampleKey, u64)> {
        self.samples.iter().map(|(k, v)| (k, *v))
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Fold raw benchmark output lines into an [`Aggregate`]
///
/// **Public** - main entry point for aggregation
///
/// Lines that do not match the benchmark grammar are skipped silently.
/// Records outside the cardinality bounds never enter the aggregate or
/// its axis sets.
///
/// # Errors
/// `ParseError` aborts the whole aggregation: an unknown data-type token
/// anywhere in the input means the size axis would be silently wrong, and
/// a clearly broken run beats a silently incomplete graph.
pub fn aggregate<I, S>(lines: I, filter: &CardinalityFilter) -> Result<Aggregate, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = Aggregate::new();
    let mut matched = 0usize;
    let mut filtered = 0usize;

    for line in lines {
        let Some(sample) = parse_line(line.as_ref())? else {
            continue;
        };
        matched += 1;

        if !filter.accepts(sample.cardinality) {
            filtered += 1;
            continue;
        }

        result.insert(sample);
    }

    debug!(
        "Aggregated {} samples ({} lines matched, {} filtered out)",
        result.len(),
        matched,
        filtered
    );

    Ok(result)
}
