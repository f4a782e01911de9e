//! The speedup aggregator: group timing records by matrix, compare methods
//! pairwise or against a baseline, and reduce ratio lists to geometric means.
//!
//! All functions here are pure reductions over in-memory slices; loading and
//! presentation live elsewhere.

use ahash::AHashMap;

use crate::record::TimingRecord;

/// Times for every method measured on one matrix.
pub type MethodTimes = AHashMap<String, f64>;

/// Ordered (baseline, comparison) method pair.
pub type MethodPair = (String, String);

/// Group records by matrix for one kernel, keeping the last time seen for a
/// (matrix, method) duplicate. Records for other kernels are ignored; an
/// empty or non-matching input yields an empty mapping.
pub fn group_by_instance(
    records: &[TimingRecord],
    operation: &str,
) -> AHashMap<String, MethodTimes> {
    let mut grouped: AHashMap<String, MethodTimes> = AHashMap::new();
    for record in records.iter().filter(|r| r.operation == operation) {
        grouped
            .entry(record.matrix.clone())
            .or_default()
            .insert(record.method.clone(), record.time);
    }
    grouped
}

/// For every matrix, compute time(A) / time(B) for every ordered method pair
/// with both methods present, accumulating ratios per pair. A comparison time
/// of zero (or less) contributes nothing. Pairs never observed together have
/// no entry.
pub fn pairwise_ratios(
    grouped: &AHashMap<String, MethodTimes>,
) -> AHashMap<MethodPair, Vec<f64>> {
    let mut ratios: AHashMap<MethodPair, Vec<f64>> = AHashMap::new();
    for times in grouped.values() {
        let mut methods: Vec<&str> = times.keys().map(String::as_str).collect();
        methods.sort_unstable();
        for &baseline in &methods {
            for &comparison in &methods {
                if baseline == comparison {
                    continue;
                }
                let comparison_time = times[comparison];
                if comparison_time > 0.0 {
                    ratios
                        .entry((baseline.to_string(), comparison.to_string()))
                        .or_default()
                        .push(times[baseline] / comparison_time);
                }
            }
        }
    }
    ratios
}

/// Specialization of [`pairwise_ratios`] with the comparison method fixed:
/// time(A) / time(baseline) keyed by A. Matrices where the baseline is absent
/// (or its time is not positive) contribute nothing.
pub fn baseline_ratios(
    grouped: &AHashMap<String, MethodTimes>,
    baseline_method: &str,
) -> AHashMap<String, Vec<f64>> {
    let mut ratios: AHashMap<String, Vec<f64>> = AHashMap::new();
    for times in grouped.values() {
        let Some(&baseline_time) = times.get(baseline_method) else {
            continue;
        };
        if baseline_time <= 0.0 {
            continue;
        }
        for (method, &time) in times {
            if method == baseline_method {
                continue;
            }
            ratios
                .entry(method.clone())
                .or_default()
                .push(time / baseline_time);
        }
    }
    ratios
}

/// exp(mean(ln r)). `None` for an empty slice or any non-positive entry;
/// ratios of positive times are always positive, so callers that guard their
/// inputs never see `None` from the positivity check.
pub fn geometric_mean(ratios: &[f64]) -> Option<f64> {
    if ratios.is_empty() || ratios.iter().any(|r| *r <= 0.0) {
        return None;
    }
    let sum_log: f64 = ratios.iter().map(|r| r.ln()).sum();
    Some((sum_log / ratios.len() as f64).exp())
}

/// Accumulated speedup ratios for every observed method pair.
#[derive(Clone, Debug, Default)]
pub struct SpeedupTable {
    ratios: AHashMap<MethodPair, Vec<f64>>,
}

impl SpeedupTable {
    pub fn from_ratios(ratios: AHashMap<MethodPair, Vec<f64>>) -> Self {
        Self { ratios }
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    pub fn ratios(&self, baseline: &str, comparison: &str) -> Option<&[f64]> {
        self.ratios
            .get(&(baseline.to_string(), comparison.to_string()))
            .map(Vec::as_slice)
    }

    /// One row per pair with a defined geometric mean, sorted by pair so the
    /// report output is reproducible. A single-sample pair reduces to its own
    /// value; a pair whose ratio list contains a non-positive entry is
    /// omitted rather than reported.
    pub fn geometric_means(&self) -> Vec<(MethodPair, f64)> {
        let mut rows: Vec<(MethodPair, f64)> = self
            .ratios
            .iter()
            .filter_map(|(pair, ratios)| geometric_mean(ratios).map(|g| (pair.clone(), g)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }
}

/// Group then compare: the full reduction for one kernel.
pub fn speedup_table(records: &[TimingRecord], operation: &str) -> SpeedupTable {
    let grouped = group_by_instance(records, operation);
    SpeedupTable::from_ratios(pairwise_ratios(&grouped))
}
