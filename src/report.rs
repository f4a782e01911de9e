use crate::aggregate::SpeedupTable;

/// Render a speedup table as the text block printed per kernel: a header,
/// then one `"<a> vs <b>: <geomean>"` line per pair (four decimal places),
/// or a fallback line when no pair produced a valid comparison.
pub fn speedup_report(label: &str, table: &SpeedupTable) -> String {
    let mut out = format!("Geometric Mean Speedups for {label}:\n");
    let rows = table.geometric_means();
    if rows.is_empty() {
        out.push_str(&format!("No valid {label} data for speedup calculation.\n"));
    } else {
        for ((baseline, comparison), geomean) in rows {
            out.push_str(&format!("{baseline} vs {comparison}: {geomean:.4}\n"));
        }
    }
    out
}
