//! Configuration for chart-generation runs.

use std::path::PathBuf;

pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (1280, 960);

/// Where one chart run reads its results and writes its images.
///
/// The chart binaries hard-code their inputs as constants; this struct is how
/// those constants travel into the rendering layer.
///
/// # Examples
///
/// ```rust
/// use sparsebench::ChartJobConfig;
///
/// let cfg = ChartJobConfig::new("results/spmv_results.json", "charts/spmv");
/// assert_eq!(cfg.image_size, sparsebench::config::DEFAULT_IMAGE_SIZE);
///
/// let wide = ChartJobConfig::default().with_image_size((1600, 960));
/// assert_eq!(wide.image_size, (1600, 960));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartJobConfig {
    /// Path of the JSON results file to analyze.
    pub results_path: PathBuf,
    /// Directory receiving the rendered PNG files. Created if absent.
    pub charts_dir: PathBuf,
    /// Output image dimensions in pixels.
    pub image_size: (u32, u32),
}

impl ChartJobConfig {
    pub fn new(results_path: impl Into<PathBuf>, charts_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_path: results_path.into(),
            charts_dir: charts_dir.into(),
            image_size: DEFAULT_IMAGE_SIZE,
        }
    }

    pub fn with_image_size(mut self, image_size: (u32, u32)) -> Self {
        self.image_size = image_size;
        self
    }
}

impl Default for ChartJobConfig {
    fn default() -> Self {
        Self::new("results.json", "charts")
    }
}
