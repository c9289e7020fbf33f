//! SVG chart rendering with `plotters`.
//!
//! Every chart plots bucket indices on the x axis and maps them back to date
//! labels in the tick formatter. Empty series still produce a captioned chart
//! over a unit mesh.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::error::TrendError;
use crate::series::{DailyCountSeries, PeriodCount};

const CANVAS: (u32, u32) = (1000, 400);
const FONT: &str = "sans-serif";

type DrawResult = Result<(), DrawingAreaErrorKind<std::io::Error>>;
type Root<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Renders one chart to `path`, filling the background first and flushing the
/// backend last.
fn draw_chart<F>(chart: &'static str, path: &Path, draw: F) -> Result<(), TrendError>
where
    F: FnOnce(&Root<'_>) -> DrawResult,
{
    let root = SVGBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)
        .and_then(|()| draw(&root))
        .and_then(|()| root.present())
        .map_err(|e| TrendError::Render {
            chart,
            message: e.to_string(),
        })?;
    tracing::debug!(chart, path = %path.display(), "rendered chart");
    Ok(())
}

/// Maps an axis position back to a bucket index when it sits on one.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn index_at(x: f64, len: usize) -> Option<usize> {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 || rounded >= len as f64 {
        return None;
    }
    Some(rounded as usize)
}

#[allow(clippy::cast_precision_loss)]
fn x_upper(len: usize) -> f64 {
    len.saturating_sub(1).max(1) as f64
}

fn y_upper(max: u32) -> f64 {
    (f64::from(max) * 1.1).max(1.0)
}

pub(crate) fn daily(series: &DailyCountSeries, path: &Path) -> Result<(), TrendError> {
    draw_chart("daily", path, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("EPA Proposed Rules per Day", (FONT, 22).into_font())
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(48)
            .build_cartesian_2d(
                0f64..x_upper(series.len()),
                0f64..y_upper(series.max_count()),
            )?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Count")
            .x_labels(8)
            .x_label_formatter(&|x: &f64| day_label(series, *x))
            .draw()?;

        chart
            .draw_series(LineSeries::new(daily_points(series), BLUE.stroke_width(2)))?
            .label("Daily Count")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
        Ok(())
    })
}

pub(crate) fn daily_smooth(
    series: &DailyCountSeries,
    window: usize,
    path: &Path,
) -> Result<(), TrendError> {
    let rolling = series.rolling_mean(window);
    let window = window.max(1);

    draw_chart("daily_smooth", path, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(
                "EPA Proposed Rules (Daily + Rolling Average)",
                (FONT, 22).into_font(),
            )
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(48)
            .build_cartesian_2d(
                0f64..x_upper(series.len()),
                0f64..y_upper(series.max_count()),
            )?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Count")
            .x_labels(8)
            .x_label_formatter(&|x: &f64| day_label(series, *x))
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                daily_points(series),
                BLUE.mix(0.4).stroke_width(1),
            ))?
            .label("Daily Count")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], BLUE.mix(0.4).stroke_width(1))
            });

        #[allow(clippy::cast_precision_loss)]
        let averaged = rolling
            .iter()
            .enumerate()
            .filter_map(|(i, avg)| avg.map(|v| (i as f64, v)));
        chart
            .draw_series(LineSeries::new(averaged, RED.stroke_width(3)))?
            .label(format!("{window}-Day Rolling Avg"))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(3)));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    })
}

pub(crate) fn weekly(series: &DailyCountSeries, path: &Path) -> Result<(), TrendError> {
    let buckets = series.weekly();
    draw_chart("weekly", path, |root| {
        bar_chart(root, "EPA Proposed Rules per Week", "Week", &buckets, |b| {
            b.period.format("%Y-%m-%d").to_string()
        })
    })
}

pub(crate) fn monthly(
    series: &DailyCountSeries,
    months: usize,
    path: &Path,
) -> Result<(), TrendError> {
    let buckets = series.monthly(months);
    let title = format!("EPA Proposed Rules per Month (Last {months} Months)");
    draw_chart("monthly", path, |root| {
        bar_chart(root, &title, "Month", &buckets, PeriodCount::month_label)
    })
}

/// One bar per bucket, centred on its index.
#[allow(clippy::cast_precision_loss)]
fn bar_chart<L>(
    root: &Root<'_>,
    title: &str,
    x_desc: &str,
    buckets: &[PeriodCount],
    label: L,
) -> DrawResult
where
    L: Fn(&PeriodCount) -> String,
{
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let x_max = buckets.len().max(1) as f64 - 0.5;

    let mut chart = ChartBuilder::on(root)
        .caption(title, (FONT, 22).into_font())
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_upper(max))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc("Count")
        .x_labels(buckets.len().clamp(1, 12))
        .x_label_formatter(&|x: &f64| {
            index_at(*x, buckets.len())
                .map(|i| label(&buckets[i]))
                .unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(buckets.iter().enumerate().map(|(i, b)| {
        let x = i as f64;
        Rectangle::new([(x - 0.4, 0.0), (x + 0.4, f64::from(b.count))], BLUE.filled())
    }))?;
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn daily_points(series: &DailyCountSeries) -> impl Iterator<Item = (f64, f64)> + '_ {
    series
        .iter()
        .enumerate()
        .map(|(i, d)| (i as f64, f64::from(d.count)))
}

fn day_label(series: &DailyCountSeries, x: f64) -> String {
    index_at(x, series.len())
        .map(|i| series.days()[i].date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_at_accepts_only_whole_positions_in_range() {
        assert_eq!(index_at(0.0, 3), Some(0));
        assert_eq!(index_at(2.0, 3), Some(2));
        assert_eq!(index_at(1.5, 3), None);
        assert_eq!(index_at(3.0, 3), None);
        assert_eq!(index_at(-1.0, 3), None);
    }

    #[test]
    fn axis_bounds_never_collapse() {
        assert!((x_upper(0) - 1.0).abs() < f64::EPSILON);
        assert!((x_upper(1) - 1.0).abs() < f64::EPSILON);
        assert!((x_upper(10) - 9.0).abs() < f64::EPSILON);
        assert!((y_upper(0) - 1.0).abs() < f64::EPSILON);
        assert!(y_upper(10) > 10.0);
    }
}
