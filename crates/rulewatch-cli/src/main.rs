mod pipeline;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rulewatch", version)]
#[command(about = "Snapshot EPA proposed rules: fetch, normalize, QA, chart")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    let config = rulewatch_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();
    match pipeline::run_pipeline(&config, &mut stdout).await? {
        pipeline::PipelineOutcome::NoData => {
            tracing::info!("pipeline stopped after fetch: no records");
        }
        pipeline::PipelineOutcome::Completed { rows, charts } => {
            tracing::info!(
                rows,
                visuals = %charts.daily.parent().unwrap_or(&config.output_dir).display(),
                "pipeline complete"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
