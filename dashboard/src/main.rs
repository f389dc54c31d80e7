use anyhow::{Context, Result};
use energy_dashboard::{build_dashboard, error_message, BuildSummary};
use energy_dashboard_config::{DashboardConfig, DEFAULT_CONFIG_FILE};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(summary) => {
            info!(
                "Dashboard saved to {} ({} layers, {} states, {} bytes)",
                summary.output.display(),
                summary.layers,
                summary.states,
                summary.bytes
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<BuildSummary> {
    let config = DashboardConfig::load_or_default(DEFAULT_CONFIG_FILE)
        .with_context(|| format!("invalid configuration in {DEFAULT_CONFIG_FILE}"))?;

    build_dashboard(&config)
}
