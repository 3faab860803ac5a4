use anyhow::{Context, Result};
use speedlog::{
    config::Config, deadline::Deadline, prober::Prober, repository::Repository, units,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let prober = Prober::new(&config);
    let measurement = prober
        .probe(Deadline::after(config.timeout))
        .await
        .with_context(|| format!("Speed test against {} failed", config.url))?;

    let repo = Repository::new(&config.output);
    repo.append(&measurement)
        .with_context(|| format!("Could not record result in {}", config.output.display()))?;

    info!(
        "{:.2} MB in {:.2}s: {:.2} Mbps ({:.2} MB/s)",
        units::megabytes(&measurement),
        units::seconds(&measurement),
        units::megabits_per_second(&measurement),
        units::megabytes_per_second(&measurement),
    );
    Ok(())
}
