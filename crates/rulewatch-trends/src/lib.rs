//! Trend aggregation and chart rendering for collected proposed rules.
//!
//! Each renderer takes a [`Table`] and an output directory, derives its own
//! [`DailyCountSeries`], and writes one SVG file. Renderers are independent of
//! each other; [`render_all`] simply runs all four into `{base_dir}/visuals`.

pub mod error;
mod render;
pub mod series;

use std::path::{Path, PathBuf};

use rulewatch_core::Table;

pub use error::TrendError;
pub use series::{daily_counts, DailyCount, DailyCountSeries, PeriodCount};

pub const DAILY_FILE: &str = "trend_daily.svg";
pub const DAILY_SMOOTH_FILE: &str = "trend_daily_smooth.svg";
pub const WEEKLY_FILE: &str = "trend_weekly.svg";
pub const MONTHLY_FILE: &str = "trend_monthly.svg";

pub const DEFAULT_ROLLING_WINDOW: usize = 7;
pub const DEFAULT_MONTHS: usize = 12;

/// Tunables shared by the smoothed and monthly charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub rolling_window: usize,
    pub months: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            rolling_window: DEFAULT_ROLLING_WINDOW,
            months: DEFAULT_MONTHS,
        }
    }
}

/// Paths written by [`render_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCharts {
    pub daily: PathBuf,
    pub daily_smooth: PathBuf,
    pub weekly: PathBuf,
    pub monthly: PathBuf,
}

impl RenderedCharts {
    /// Chart name/path pairs in render order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &Path); 4] {
        [
            ("daily", self.daily.as_path()),
            ("daily_smooth", self.daily_smooth.as_path()),
            ("weekly", self.weekly.as_path()),
            ("monthly", self.monthly.as_path()),
        ]
    }

    /// Looks up a chart path by name (`"daily"`, `"daily_smooth"`,
    /// `"weekly"`, `"monthly"`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, path)| path)
    }
}

fn ensure_dir(dir: &Path) -> Result<(), TrendError> {
    std::fs::create_dir_all(dir).map_err(|source| TrendError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Line chart of raw daily counts.
///
/// # Errors
///
/// Returns [`TrendError`] if `out_dir` cannot be created or the chart cannot
/// be written.
pub fn render_daily(table: &Table, out_dir: &Path) -> Result<PathBuf, TrendError> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(DAILY_FILE);
    render::daily(&daily_counts(table), &path)?;
    Ok(path)
}

/// Daily counts (faded) overlaid with a trailing `window`-day average.
///
/// # Errors
///
/// Returns [`TrendError`] if `out_dir` cannot be created or the chart cannot
/// be written.
pub fn render_daily_smooth(
    table: &Table,
    out_dir: &Path,
    window: usize,
) -> Result<PathBuf, TrendError> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(DAILY_SMOOTH_FILE);
    render::daily_smooth(&daily_counts(table), window, &path)?;
    Ok(path)
}

/// Bar chart of counts per calendar week.
///
/// # Errors
///
/// Returns [`TrendError`] if `out_dir` cannot be created or the chart cannot
/// be written.
pub fn render_weekly(table: &Table, out_dir: &Path) -> Result<PathBuf, TrendError> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(WEEKLY_FILE);
    render::weekly(&daily_counts(table), &path)?;
    Ok(path)
}

/// Bar chart of counts for the most recent `months` calendar months.
///
/// # Errors
///
/// Returns [`TrendError`] if `out_dir` cannot be created or the chart cannot
/// be written.
pub fn render_monthly(
    table: &Table,
    out_dir: &Path,
    months: usize,
) -> Result<PathBuf, TrendError> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(MONTHLY_FILE);
    render::monthly(&daily_counts(table), months, &path)?;
    Ok(path)
}

/// Runs all four renderers into `{base_dir}/visuals`.
///
/// # Errors
///
/// Returns the first [`TrendError`] raised by any renderer.
pub fn render_all(
    table: &Table,
    base_dir: &Path,
    options: ChartOptions,
) -> Result<RenderedCharts, TrendError> {
    let visuals = base_dir.join("visuals");
    Ok(RenderedCharts {
        daily: render_daily(table, &visuals)?,
        daily_smooth: render_daily_smooth(table, &visuals, options.rolling_window)?,
        weekly: render_weekly(table, &visuals)?,
        monthly: render_monthly(table, &visuals, options.months)?,
    })
}
