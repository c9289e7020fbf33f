//! fetch → normalize → QA → visualize, one stage after another.
//!
//! Each stage consumes the complete output of the previous one and prints a
//! single status line once its artifact is on disk.

use std::io::Write;

use anyhow::Context;
use rulewatch_core::{basic_qa, normalize, write_csv, write_markdown, AppConfig};
use rulewatch_fedreg::FedRegClient;
use rulewatch_trends::{render_all, ChartOptions, RenderedCharts};

/// How a pipeline run ended.
#[derive(Debug)]
pub(crate) enum PipelineOutcome {
    /// The fetch returned zero records; only the raw file was written.
    NoData,
    Completed { rows: usize, charts: RenderedCharts },
}

/// Runs every stage, writing status lines to `out`.
///
/// # Errors
///
/// Returns an error if an output directory cannot be created, the fetch
/// fails, or any artifact cannot be written. Nothing after the failing
/// stage runs.
pub(crate) async fn run_pipeline<W: Write>(
    config: &AppConfig,
    out: &mut W,
) -> anyhow::Result<PipelineOutcome> {
    for dir in config.output_dirs() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let client = FedRegClient::with_base_url(
        &config.fedreg_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build Federal Register client")?;

    let raw = client
        .fetch(config.lookback_days, config.per_page)
        .await
        .context("failed to fetch proposed rules")?;
    let raw_path = config.raw_csv_path();
    write_csv(&raw, &raw_path)?;
    writeln!(
        out,
        "[OK] Raw data saved -> {} ({} rows)",
        raw_path.display(),
        raw.len()
    )?;

    if raw.is_empty() {
        tracing::warn!("fetch returned no records; skipping remaining stages");
        writeln!(out, "[WARN] No data. No next step.")?;
        return Ok(PipelineOutcome::NoData);
    }

    let normalized = normalize(&raw);
    let normalized_path = config.normalized_csv_path();
    write_csv(&normalized, &normalized_path)?;
    writeln!(out, "[OK] Normalized data saved -> {}", normalized_path.display())?;

    let report = basic_qa(&normalized);
    let qa_path = config.qa_report_path();
    write_markdown(&report, &qa_path)?;
    writeln!(out, "[OK] QA report saved -> {}", qa_path.display())?;

    let options = ChartOptions {
        rolling_window: config.rolling_window,
        months: config.months,
    };
    let charts = render_all(&normalized, &config.output_dir, options)
        .context("failed to render trend charts")?;
    for (name, path) in charts.entries() {
        writeln!(out, "[OK] {name} plot saved -> {}", path.display())?;
    }

    Ok(PipelineOutcome::Completed {
        rows: normalized.len(),
        charts,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
