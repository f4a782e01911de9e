use sparsebench::{
    TimingRecord, baseline_ratios, geometric_mean, group_by_instance, pairwise_ratios,
    speedup_table,
};

fn record(matrix: &str, method: &str, operation: &str, time: f64) -> TimingRecord {
    TimingRecord {
        matrix: matrix.into(),
        method: method.into(),
        operation: operation.into(),
        time,
    }
}

fn sample_records() -> Vec<TimingRecord> {
    vec![
        record("m1", "x", "bfs", 2.0),
        record("m1", "y", "bfs", 1.0),
        record("m2", "x", "bfs", 4.0),
        record("m2", "y", "bfs", 2.0),
    ]
}

#[test]
fn test_geometric_mean_of_single_sample_is_the_sample() {
    assert_eq!(geometric_mean(&[3.5]), Some(3.5));
}

#[test]
fn test_geometric_mean_is_order_invariant() {
    let forward = geometric_mean(&[0.5, 2.0, 8.0]).unwrap();
    let backward = geometric_mean(&[8.0, 0.5, 2.0]).unwrap();
    assert!((forward - backward).abs() < 1e-12);
}

#[test]
fn test_geometric_mean_of_two_and_eight_is_four() {
    let mean = geometric_mean(&[2.0, 8.0]).unwrap();
    assert!((mean - 4.0).abs() < 1e-12);
}

#[test]
fn test_geometric_mean_undefined_for_empty_or_nonpositive() {
    assert_eq!(geometric_mean(&[]), None);
    assert_eq!(geometric_mean(&[1.0, 0.0]), None);
    assert_eq!(geometric_mean(&[1.0, -2.0]), None);
}

#[test]
fn test_group_by_instance_filters_by_operation() {
    let records = vec![
        record("m1", "x", "bfs", 2.0),
        record("m1", "y", "bellmanford", 1.0),
    ];
    let grouped = group_by_instance(&records, "bfs");
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped["m1"].len(), 1);
    assert_eq!(grouped["m1"]["x"], 2.0);
}

#[test]
fn test_group_by_instance_empty_input_yields_empty_mapping() {
    assert!(group_by_instance(&[], "bfs").is_empty());
}

#[test]
fn test_group_by_instance_is_deterministic() {
    let records = sample_records();
    let first = group_by_instance(&records, "bfs");
    let second = group_by_instance(&records, "bfs");
    assert_eq!(first, second);
}

#[test]
fn test_pairwise_ratios_on_the_two_matrix_example() {
    let grouped = group_by_instance(&sample_records(), "bfs");
    let ratios = pairwise_ratios(&grouped);
    assert_eq!(ratios[&("x".to_string(), "y".to_string())], vec![2.0, 2.0]);
    assert_eq!(ratios[&("y".to_string(), "x".to_string())], vec![0.5, 0.5]);

    let table = speedup_table(&sample_records(), "bfs");
    let means = table.geometric_means();
    assert_eq!(means.len(), 2);
    assert_eq!(means[0], (("x".to_string(), "y".to_string()), 2.0));
    assert_eq!(means[1], (("y".to_string(), "x".to_string()), 0.5));
}

#[test]
fn test_pairwise_ratios_never_produces_self_pairs() {
    let records = vec![
        record("m1", "x", "bfs", 2.0),
        record("m1", "y", "bfs", 1.0),
        record("m1", "z", "bfs", 4.0),
    ];
    let grouped = group_by_instance(&records, "bfs");
    for (baseline, comparison) in pairwise_ratios(&grouped).keys() {
        assert_ne!(baseline, comparison);
    }
}

#[test]
fn test_zero_comparison_time_contributes_nothing() {
    let records = vec![
        record("m1", "x", "bfs", 2.0),
        record("m1", "y", "bfs", 0.0),
        record("m2", "x", "bfs", 4.0),
        record("m2", "y", "bfs", 2.0),
    ];
    let grouped = group_by_instance(&records, "bfs");
    let ratios = pairwise_ratios(&grouped);
    // m1 contributes no (x, y) ratio; m2 still does.
    assert_eq!(ratios[&("x".to_string(), "y".to_string())], vec![2.0]);
    // The zero-time method still appears as a baseline against x.
    let mut reverse = ratios[&("y".to_string(), "x".to_string())].clone();
    reverse.sort_by(f64::total_cmp);
    assert_eq!(reverse, vec![0.0, 0.5]);
}

#[test]
fn test_single_method_instance_contributes_no_pairs() {
    let records = vec![record("m1", "x", "bfs", 2.0)];
    let grouped = group_by_instance(&records, "bfs");
    assert!(pairwise_ratios(&grouped).is_empty());
}

#[test]
fn test_operation_filter_without_matches_yields_empty_table() {
    let table = speedup_table(&sample_records(), "spgemm");
    assert!(table.is_empty());
    assert!(table.geometric_means().is_empty());
}

#[test]
fn test_single_sample_pair_has_degenerate_geometric_mean() {
    let records = vec![
        record("m1", "x", "bfs", 3.0),
        record("m1", "y", "bfs", 1.0),
    ];
    let table = speedup_table(&records, "bfs");
    assert_eq!(table.ratios("x", "y"), Some(&[3.0][..]));
    let means = table.geometric_means();
    assert_eq!(means[0], (("x".to_string(), "y".to_string()), 3.0));
}

#[test]
fn test_baseline_ratios_skip_instances_without_baseline() {
    let records = vec![
        record("m1", "x", "bfs", 2.0),
        record("m1", "base", "bfs", 1.0),
        record("m2", "x", "bfs", 4.0),
    ];
    let grouped = group_by_instance(&records, "bfs");
    let ratios = baseline_ratios(&grouped, "base");
    assert_eq!(ratios["x"], vec![2.0]);
    assert!(!ratios.contains_key("base"));
}

#[test]
fn test_baseline_ratios_skip_nonpositive_baseline_times() {
    let records = vec![
        record("m1", "x", "bfs", 2.0),
        record("m1", "base", "bfs", 0.0),
    ];
    let grouped = group_by_instance(&records, "bfs");
    assert!(baseline_ratios(&grouped, "base").is_empty());
}
