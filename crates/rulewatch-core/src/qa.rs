//! Data-quality metrics and the markdown QA report.

use std::collections::HashSet;
use std::fmt::Write;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::record::{Table, STANDARD_COLUMNS};

/// Summaries shorter than this many characters count as short.
pub const SHORT_SUMMARY_CHARS: usize = 20;

/// Quality metrics for a normalized table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaReport {
    pub generated_at: DateTime<Utc>,
    pub rows: usize,
    /// Null count per standard column, in column order.
    pub missing_by_column: Vec<(&'static str, usize)>,
    pub duplicate_titles: usize,
    /// Records whose date is missing or unparseable.
    pub invalid_dates: usize,
    pub short_summaries: usize,
}

/// Computes row count, per-column nulls, duplicate titles, invalid dates and
/// short summaries.
#[must_use]
pub fn basic_qa(table: &Table) -> QaReport {
    let missing_by_column = STANDARD_COLUMNS
        .iter()
        .map(|&col| {
            let missing = table.iter().filter(|r| r.column(col).is_none()).count();
            (col, missing)
        })
        .collect();

    // Null titles duplicate each other, same as any repeated value.
    let mut seen_titles: HashSet<Option<&str>> = HashSet::new();
    let duplicate_titles = table
        .iter()
        .filter(|r| !seen_titles.insert(r.title.as_deref()))
        .count();

    let invalid_dates = table.iter().filter(|r| !r.parsed_date().is_valid()).count();

    let short_summaries = table
        .iter()
        .filter(|r| r.summary.as_deref().unwrap_or("").chars().count() < SHORT_SUMMARY_CHARS)
        .count();

    tracing::debug!(
        rows = table.len(),
        duplicate_titles,
        invalid_dates,
        short_summaries,
        "computed QA metrics"
    );

    QaReport {
        generated_at: Utc::now(),
        rows: table.len(),
        missing_by_column,
        duplicate_titles,
        invalid_dates,
        short_summaries,
    }
}

/// Renders the report as markdown.
#[must_use]
pub fn render_markdown(report: &QaReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# QA Report");
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "- Generated: {}Z",
        report.generated_at.format("%Y-%m-%dT%H:%M:%S%.6f")
    );
    let _ = writeln!(output, "- Rows: **{}**", report.rows);
    let _ = writeln!(output, "- Duplicate titles: **{}**", report.duplicate_titles);
    let _ = writeln!(output, "- Invalid dates: **{}**", report.invalid_dates);
    let _ = writeln!(
        output,
        "- Short summaries (<{SHORT_SUMMARY_CHARS} chars): **{}**",
        report.short_summaries
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Missing by Column");
    for (col, count) in &report.missing_by_column {
        let _ = writeln!(output, "- {col}: {count}");
    }

    output
}

/// Writes the rendered report to `path`.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the file cannot be written.
pub fn write_markdown(report: &QaReport, path: &Path) -> Result<(), CoreError> {
    std::fs::write(path, render_markdown(report)).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
