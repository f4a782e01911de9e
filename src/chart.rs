//! Grouped bar charts over benchmark results: data preparation from timing
//! records and PNG rendering.

pub mod data;
pub mod render;

pub use data::{
    ChartData, all_formats_data, baseline_chart_data, best_variant_per_instance,
    comparison_data, method_results, order_speedups, speedups_against,
};
pub use render::{BarSeries, GroupedBarChart, render_png, slug_title};
