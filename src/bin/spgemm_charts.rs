use std::{path::Path, process};

use sparsebench::{
    ChartJobConfig, SparseBenchError,
    chart::{BarSeries, GroupedBarChart, baseline_chart_data, render_png},
    load_records,
};

const OPERATION: &str = "spgemm";
const BASELINE: &str = "spgemm_taco_gustavson";
const CHARTS_DIR: &str = "charts/spgemm";
const IMAGE_SIZE: (u32, u32) = (1600, 960);
// (results file, log-scale y axis)
const INPUTS: [(&str, bool); 2] = [
    ("results/lanka_joel.json", false),
    ("results/lanka_small.json", true),
];

fn main() {
    if let Err(err) = run() {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), SparseBenchError> {
    for (results_file, log_scale) in INPUTS {
        let config =
            ChartJobConfig::new(results_file, CHARTS_DIR).with_image_size(IMAGE_SIZE);
        let records = load_records(&config.results_path)?;
        let data = baseline_chart_data(&records, OPERATION, BASELINE);
        let chart = GroupedBarChart {
            title: format!("{} Speedup over {BASELINE}", input_name(results_file)),
            y_label: "Speedup".to_string(),
            x_labels: data.matrices,
            series: data
                .series
                .into_iter()
                .map(|(name, values)| BarSeries {
                    name,
                    values,
                    labeled: false,
                })
                .collect(),
            log_scale,
        };
        let path = render_png(&chart, &config)?;
        println!("chart_written=\"{}\"", path.display());
    }
    Ok(())
}

fn input_name(results_file: &str) -> &str {
    Path::new(results_file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(results_file)
}
