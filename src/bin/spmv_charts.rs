use std::process;

use sparsebench::{
    ChartJobConfig, SparseBenchError,
    chart::{BarSeries, ChartData, GroupedBarChart, all_formats_data, comparison_data, render_png},
    load_records,
};

const RESULTS_FILE: &str = "results/spmv_results.json";
const CHARTS_DIR: &str = "charts/spmv";
const FAMILY: &str = "finch";
const REFERENCE: &str = "taco";
const ALL_FORMAT_METHODS: [&str; 4] = ["julia_stdlib", "finch", "taco", "suite_sparse"];
const COMPARISON_CHARTS: [(&str, &str); 9] = [
    ("finch", "Finch SparseList Symmetric SpMV Performance"),
    ("finch_unsym", "Finch SparseList SpMV Performance"),
    ("finch_vbl", "Finch SparseVBL Symmetric SpMV Performance"),
    ("finch_vbl_unsym", "Finch SparseVBL SpMV Performance"),
    ("finch_band", "Finch SparseBand Symmetric SpMV Performance"),
    ("finch_band_unsym", "Finch SparseBand SpMV Performance"),
    ("finch_pattern", "Finch SparseList Pattern Symmetric SpMV Performance"),
    ("finch_pattern_unsym", "Finch SparseList Pattern SpMV Performance"),
    ("finch_point", "Finch SparsePoint SpMV Performance"),
];

fn main() {
    if let Err(err) = run() {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), SparseBenchError> {
    let config = ChartJobConfig::new(RESULTS_FILE, CHARTS_DIR);
    let records = load_records(&config.results_path)?;

    let all = all_formats_data(&records, &ALL_FORMAT_METHODS, FAMILY, REFERENCE)?;
    render(
        &config,
        to_chart(all, "SpMV Performance", FAMILY),
    )?;

    for (method, title) in COMPARISON_CHARTS {
        let data = comparison_data(&records, method, REFERENCE);
        render(&config, to_chart(data, title, method))?;
    }
    Ok(())
}

fn to_chart(data: ChartData, title: &str, labeled_method: &str) -> GroupedBarChart {
    GroupedBarChart {
        title: title.to_string(),
        y_label: String::new(),
        x_labels: data.matrices,
        series: data
            .series
            .into_iter()
            .map(|(name, values)| BarSeries {
                labeled: name == labeled_method,
                name,
                values,
            })
            .collect(),
        log_scale: false,
    }
}

fn render(config: &ChartJobConfig, chart: GroupedBarChart) -> Result<(), SparseBenchError> {
    let path = render_png(&chart, config)?;
    println!("chart_written=\"{}\"", path.display());
    Ok(())
}
