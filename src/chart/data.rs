//! Chart input preparation: turning raw timing records into per-matrix
//! speedup series.

use ahash::AHashMap;

use crate::errors::SparseBenchError;
use crate::record::TimingRecord;

/// Matrices in display order plus one value per matrix for each series.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub matrices: Vec<String>,
    pub series: Vec<(String, Vec<f64>)>,
}

/// Per-matrix times for one method, in no particular order.
pub fn method_results(records: &[TimingRecord], method: &str) -> AHashMap<String, f64> {
    let mut times = AHashMap::new();
    for record in records.iter().filter(|r| r.method == method) {
        times.insert(record.matrix.clone(), record.time);
    }
    times
}

/// slow/fast ratio per matrix measured by both methods.
pub fn speedups_against(
    faster: &AHashMap<String, f64>,
    slower: &AHashMap<String, f64>,
) -> AHashMap<String, f64> {
    let mut speedups = AHashMap::new();
    for (matrix, &slow_time) in slower {
        if let Some(&fast_time) = faster.get(matrix) {
            speedups.insert(matrix.clone(), slow_time / fast_time);
        }
    }
    speedups
}

/// Speedups sorted descending, best first.
pub fn order_speedups(speedups: &AHashMap<String, f64>) -> Vec<(String, f64)> {
    let mut ordered: Vec<(String, f64)> = speedups
        .iter()
        .map(|(matrix, &speedup)| (matrix.clone(), speedup))
        .collect();
    ordered.sort_by(|a, b| b.1.total_cmp(&a.1));
    ordered
}

/// For each matrix, the fastest method among those whose name contains the
/// family prefix. Ties keep the first record seen.
pub fn best_variant_per_instance(
    records: &[TimingRecord],
    family: &str,
) -> AHashMap<String, String> {
    let mut best: AHashMap<String, (String, f64)> = AHashMap::new();
    for record in records.iter().filter(|r| r.method.contains(family)) {
        match best.get(&record.matrix) {
            Some((_, time)) if *time <= record.time => {}
            _ => {
                best.insert(record.matrix.clone(), (record.method.clone(), record.time));
            }
        }
    }
    best.into_iter()
        .map(|(matrix, (method, _))| (matrix, method))
        .collect()
}

/// Series for the all-formats chart: family variants collapse to the best
/// variant per matrix (renamed to the bare family name), and every series is
/// normalized against the reference method's times.
pub fn all_formats_data(
    records: &[TimingRecord],
    methods: &[&str],
    family: &str,
    reference: &str,
) -> Result<ChartData, SparseBenchError> {
    let best = best_variant_per_instance(records, family);
    let mut matrices = Vec::new();
    let mut times: AHashMap<String, Vec<f64>> = AHashMap::new();
    for record in records {
        if !matrices.contains(&record.matrix) {
            matrices.push(record.matrix.clone());
        }
        if record.method.contains(family)
            && best.get(&record.matrix).map(String::as_str) != Some(record.method.as_str())
        {
            continue;
        }
        let method = if record.method.contains(family) {
            family.to_string()
        } else {
            record.method.clone()
        };
        times.entry(method).or_default().push(record.time);
    }

    let reference_times = times
        .get(reference)
        .cloned()
        .ok_or_else(|| SparseBenchError::not_found(format!("reference method {reference}")))?;
    let mut series = Vec::with_capacity(methods.len());
    for &method in methods {
        let method_times = times
            .get(method)
            .ok_or_else(|| SparseBenchError::not_found(format!("method {method}")))?;
        if method_times.len() != reference_times.len() {
            return Err(SparseBenchError::invalid_input(format!(
                "method {method} has {} samples, reference {reference} has {}",
                method_times.len(),
                reference_times.len()
            )));
        }
        let values = reference_times
            .iter()
            .zip(method_times)
            .map(|(reference_time, time)| reference_time / time)
            .collect();
        series.push((method.to_string(), values));
    }
    Ok(ChartData { matrices, series })
}

/// Series for a single method-vs-reference chart: the method's speedup per
/// matrix with the reference pinned at 1. Matrices keep their file order and
/// are limited to those measured by both methods.
pub fn comparison_data(
    records: &[TimingRecord],
    method: &str,
    reference: &str,
) -> ChartData {
    let fast = method_results(records, method);
    let slow = method_results(records, reference);
    let speedups = speedups_against(&fast, &slow);

    let mut matrices = Vec::new();
    let mut values = Vec::new();
    for record in records.iter().filter(|r| r.method == reference) {
        if matrices.contains(&record.matrix) {
            continue;
        }
        if let Some(&speedup) = speedups.get(&record.matrix) {
            matrices.push(record.matrix.clone());
            values.push(speedup);
        }
    }
    let reference_bars = vec![1.0; values.len()];
    ChartData {
        matrices,
        series: vec![
            (method.to_string(), values),
            (reference.to_string(), reference_bars),
        ],
    }
}

/// Series for a baseline-relative chart over one kernel: one series per
/// method holding baseline_time / time per matrix. A zero time yields a 0.0
/// bar; matrices without a baseline measurement are dropped; a `.jl` suffix
/// on method names is stripped.
pub fn baseline_chart_data(
    records: &[TimingRecord],
    operation: &str,
    baseline_method: &str,
) -> ChartData {
    let mut matrices = Vec::new();
    let mut baseline_times: AHashMap<String, f64> = AHashMap::new();
    for record in records.iter().filter(|r| r.operation == operation) {
        if !matrices.contains(&record.matrix) {
            matrices.push(record.matrix.clone());
        }
        if record.method == baseline_method {
            baseline_times.insert(record.matrix.clone(), record.time);
        }
    }
    matrices.retain(|matrix| baseline_times.contains_key(matrix));
    let slots: AHashMap<&str, usize> = matrices
        .iter()
        .enumerate()
        .map(|(slot, matrix)| (matrix.as_str(), slot))
        .collect();

    let mut order: Vec<String> = Vec::new();
    let mut values: AHashMap<String, Vec<f64>> = AHashMap::new();
    for record in records.iter().filter(|r| r.operation == operation) {
        let Some(&slot) = slots.get(record.matrix.as_str()) else {
            continue;
        };
        let method = record.method.replace(".jl", "");
        if !order.contains(&method) {
            order.push(method.clone());
        }
        let series = values
            .entry(method)
            .or_insert_with(|| vec![0.0; matrices.len()]);
        series[slot] = if record.time != 0.0 {
            baseline_times[&record.matrix] / record.time
        } else {
            0.0
        };
    }

    let series = order
        .into_iter()
        .filter_map(|method| values.remove(&method).map(|series| (method, series)))
        .collect();
    ChartData { matrices, series }
}
