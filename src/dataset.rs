use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::record::TimingRecord;

/// Synthetic matrix names for benchmarks and tests.
pub fn matrix_names(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("mtx_{idx:03}")).collect()
}

/// Generate one positive timing per (matrix, method), deterministic for a
/// given seed.
pub fn generate_records(
    matrices: &[&str],
    methods: &[&str],
    operation: &str,
    seed: u64,
) -> Vec<TimingRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(matrices.len() * methods.len());
    for matrix in matrices {
        for method in methods {
            records.push(TimingRecord {
                matrix: (*matrix).to_string(),
                method: (*method).to_string(),
                operation: operation.to_string(),
                time: rng.gen_range(1.0e-4..1.0),
            });
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::{generate_records, matrix_names};

    #[test]
    fn test_generate_records_is_deterministic_per_seed() {
        let matrices = matrix_names(4);
        let matrix_refs: Vec<&str> = matrices.iter().map(String::as_str).collect();
        let methods = ["finch", "taco"];
        let first = generate_records(&matrix_refs, &methods, "spmv", 7);
        let second = generate_records(&matrix_refs, &methods, "spmv", 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_records_covers_every_pair_with_positive_times() {
        let matrices = matrix_names(3);
        let matrix_refs: Vec<&str> = matrices.iter().map(String::as_str).collect();
        let methods = ["finch", "taco", "julia_stdlib"];
        let records = generate_records(&matrix_refs, &methods, "spgemm", 42);
        assert_eq!(records.len(), 9);
        assert!(records.iter().all(|r| r.time > 0.0));
        assert!(records.iter().all(|r| r.operation == "spgemm"));
    }
}
