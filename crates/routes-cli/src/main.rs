//! CLI binary: report how many new routes make every airport reachable from a hub.
//!
//! Reads `routes.toml` from the working directory, or the file named by
//! `ROUTES_CONFIG`. Without either, the bundled sample network is used.

use anyhow::{Context, Result};
use routes_core::config::{OutputFormat, RoutesConfig, env_var};
use routes_core::network::{RouteNetwork, RouteReport};
use std::path::{Path, PathBuf};

const SAMPLE_CONFIG: &str = include_str!("../data/sample.toml");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let explicit = env_var("ROUTES_CONFIG").map(PathBuf::from);
    let config = load_config(&cwd, explicit.as_deref(), env_var)?;

    let report = plan(&config)?;
    println!("{}", render(&report, config.output.format)?);
    Ok(())
}

/// Resolve configuration: explicit file, then `routes.toml` in `dir`, then the bundled sample.
/// Overrides come from `lookup`.
fn load_config(
    dir: &Path,
    explicit: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<RoutesConfig> {
    let config = if let Some(path) = explicit {
        tracing::info!("loading routes from {}", path.display());
        RoutesConfig::load_file(path)?
    } else if RoutesConfig::path_in(dir).exists() {
        tracing::info!("loading routes from {}", RoutesConfig::path_in(dir).display());
        RoutesConfig::load(dir)?
    } else {
        tracing::info!("no routes.toml found, using bundled sample network");
        RoutesConfig::from_toml_str(SAMPLE_CONFIG)?
    };
    let config = config.with_overrides(lookup);
    config.validate()?;
    Ok(config)
}

fn plan(config: &RoutesConfig) -> Result<RouteReport> {
    let network =
        RouteNetwork::from_config(&config.network).context("failed to build route network")?;
    tracing::info!(
        airports = network.airports().len(),
        routes = network.route_count(),
        start = %config.network.start,
        "planning additional routes"
    );
    network
        .report(&config.network.start)
        .with_context(|| format!("failed to plan routes from {}", config.network.start))
}

fn render(report: &RouteReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Minimum additional routes needed: {}",
            report.additional_routes
        )),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize route report")
        }
    }
}
