//! Rendering tests: every chart must produce an SVG file, including for empty
//! and single-day inputs.

use rulewatch_core::{Record, Table};
use rulewatch_trends::{
    render_all, render_daily, render_monthly, ChartOptions, DAILY_FILE, MONTHLY_FILE,
};

fn table(dates: &[&str]) -> Table {
    dates
        .iter()
        .map(|d| {
            Record::new(
                Some((*d).to_string()),
                Some(format!("Notice {d}")),
                None,
                Some("Environmental Protection Agency".to_string()),
                None,
            )
        })
        .collect()
}

fn assert_svg(path: &std::path::Path) {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("expected {} to exist: {e}", path.display()));
    assert!(content.contains("<svg"), "not an SVG document: {}", path.display());
}

#[test]
fn render_all_writes_four_charts_under_visuals() {
    let dir = tempfile::tempdir().unwrap();
    let table = table(&[
        "2024-01-01",
        "2024-01-01",
        "2024-01-03",
        "2024-02-15",
        "2024-03-30",
        "not-a-date",
    ]);

    let charts = render_all(&table, dir.path(), ChartOptions::default()).unwrap();

    let visuals = dir.path().join("visuals");
    assert_eq!(charts.daily, visuals.join("trend_daily.svg"));
    assert_eq!(charts.daily_smooth, visuals.join("trend_daily_smooth.svg"));
    assert_eq!(charts.weekly, visuals.join("trend_weekly.svg"));
    assert_eq!(charts.monthly, visuals.join("trend_monthly.svg"));
    let names: Vec<&str> = charts.entries().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["daily", "daily_smooth", "weekly", "monthly"]);
    for (_, path) in charts.entries() {
        assert_svg(path);
    }
    assert_eq!(charts.get("weekly"), Some(charts.weekly.as_path()));
    assert_eq!(charts.get("yearly"), None);
}

#[test]
fn empty_table_renders_blank_charts_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let charts = render_all(&Table::default(), dir.path(), ChartOptions::default()).unwrap();
    for (_, path) in charts.entries() {
        assert_svg(path);
    }
}

#[test]
fn single_day_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = render_daily(&table(&["2024-05-05"]), dir.path()).unwrap();
    assert_eq!(path, dir.path().join(DAILY_FILE));
    assert_svg(&path);
}

#[test]
fn monthly_chart_carries_month_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = render_monthly(&table(&["2024-01-10", "2024-03-02"]), dir.path(), 12).unwrap();
    assert_eq!(path, dir.path().join(MONTHLY_FILE));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("2024-01"));
    assert!(content.contains("2024-03"));
    assert!(content.contains("Last 12 Months"));
}

#[test]
fn renderers_create_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let path = render_daily(&table(&["2024-05-05"]), &nested).unwrap();
    assert_svg(&path);
}
