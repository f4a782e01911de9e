//! Speedup analysis for sparse-kernel benchmark results.
//! Loads JSON timing records and reduces them to geometric-mean speedup
//! tables or grouped bar charts rendered as PNG files.

pub mod aggregate;
pub mod chart;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod record;
pub mod report;

pub use crate::aggregate::{
    MethodPair, SpeedupTable, baseline_ratios, geometric_mean, group_by_instance,
    pairwise_ratios, speedup_table,
};
pub use crate::chart::render::{BarSeries, GroupedBarChart, render_png, slug_title};
pub use crate::config::ChartJobConfig;
pub use crate::errors::SparseBenchError;
pub use crate::record::{TimingRecord, load_records};
pub use crate::report::speedup_report;
