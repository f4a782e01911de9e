//! PNG rendering of grouped bar charts with plotters.

use std::{
    fs,
    path::{Path, PathBuf},
};

use plotters::chart::{ChartContext, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::ChartJobConfig;
use crate::errors::SparseBenchError;

// Fraction of each matrix slot occupied by bars.
const GROUP_WIDTH: f64 = 0.8;

#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    /// Whether bars in this series get their value printed above them.
    pub labeled: bool,
}

/// A grouped bar chart: one group of bars per matrix, one bar per series.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedBarChart {
    pub title: String,
    pub y_label: String,
    pub x_labels: Vec<String>,
    pub series: Vec<BarSeries>,
    pub log_scale: bool,
}

impl GroupedBarChart {
    pub fn file_name(&self) -> String {
        format!("{}.png", slug_title(&self.title))
    }

    pub fn validate(&self) -> Result<(), SparseBenchError> {
        if self.x_labels.is_empty() {
            return Err(SparseBenchError::invalid_input(format!(
                "chart {:?} has no matrices",
                self.title
            )));
        }
        if self.series.is_empty() {
            return Err(SparseBenchError::invalid_input(format!(
                "chart {:?} has no series",
                self.title
            )));
        }
        for series in &self.series {
            if series.values.len() != self.x_labels.len() {
                return Err(SparseBenchError::invalid_input(format!(
                    "series {} has {} values for {} matrices",
                    series.name,
                    series.values.len(),
                    self.x_labels.len()
                )));
            }
        }
        Ok(())
    }

    fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0_f64, f64::max)
    }

    fn min_positive(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| *v > 0.0)
            .fold(None, |acc: Option<f64>, v| {
                Some(acc.map_or(v, |a| a.min(v)))
            })
    }
}

/// File-name form of a chart title: lowercased, spaces and hyphens replaced
/// with underscores.
pub fn slug_title(title: &str) -> String {
    title.to_lowercase().replace([' ', '-'], "_")
}

/// Render a chart into the configured charts directory (created if absent)
/// and return the written path.
pub fn render_png(
    chart: &GroupedBarChart,
    config: &ChartJobConfig,
) -> Result<PathBuf, SparseBenchError> {
    chart.validate()?;
    fs::create_dir_all(&config.charts_dir)
        .map_err(|e| SparseBenchError::render(format!("{}: {e}", config.charts_dir.display())))?;
    let out_path = config.charts_dir.join(chart.file_name());
    draw_to_file(chart, &out_path, config.image_size)?;
    Ok(out_path)
}

fn draw_to_file(
    chart: &GroupedBarChart,
    path: &Path,
    size: (u32, u32),
) -> Result<(), SparseBenchError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let x_range = 0f64..chart.x_labels.len() as f64;
    let y_top = (chart.max_value().ceil() + 1.0).max(1.0);
    if chart.log_scale {
        // Log axes cannot start at zero; bars are clipped at the floor.
        let floor = chart.min_positive().unwrap_or(1.0) / 10.0;
        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(140)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, (floor..y_top).log_scale())
            .map_err(render_err)?;
        draw_grouped(&mut ctx, chart, floor)?;
    } else {
        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(140)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, 0f64..y_top)
            .map_err(render_err)?;
        draw_grouped(&mut ctx, chart, 0.0)?;
    }
    root.present().map_err(render_err)
}

fn draw_grouped<'a, DB, Y>(
    ctx: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    chart: &GroupedBarChart,
    floor: f64,
) -> Result<(), SparseBenchError>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let labels = &chart.x_labels;
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|x| labels.get(x.floor() as usize).cloned().unwrap_or_default())
        .x_label_style(
            ("sans-serif", 11)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(render_err)?;

    let width = GROUP_WIDTH / chart.series.len() as f64;
    for (idx, series) in chart.series.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        let offset = width * idx as f64;
        ctx.draw_series(series.values.iter().enumerate().map(|(slot, &value)| {
            let x0 = slot as f64 + offset;
            Rectangle::new([(x0, floor), (x0 + width, value.max(floor))], color.filled())
        }))
        .map_err(render_err)?
        .label(series.name.as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled()));

        if series.labeled {
            let style = ("sans-serif", 11)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            ctx.draw_series(series.values.iter().enumerate().map(|(slot, &value)| {
                let x = slot as f64 + offset + width / 2.0;
                Text::new(format!("{value:.2}"), (x, value.max(floor)), style.clone())
            }))
            .map_err(render_err)?;
        }
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;
    Ok(())
}

fn render_err<E: std::fmt::Display>(err: E) -> SparseBenchError {
    SparseBenchError::render(err.to_string())
}
