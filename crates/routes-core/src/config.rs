//! Configuration for route networks and report output.
//!
//! Load order: `routes.toml` (or defaults) → overrides, which the binary reads from
//! environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "routes.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub network: NetworkConfig,
    pub output: OutputConfig,
}

/// The airports, the routes between them, and the hub to plan from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Airport codes; position in this list is the vertex index.
    pub airports: Vec<String>,
    pub routes: Vec<RouteConfig>,
    /// Code of the starting airport.
    pub start: String,
}

/// A single directed route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub from: String,
    pub to: String,
}

/// Report output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single summary line.
    #[default]
    Text,
    /// Full report as pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown output format: {other} (expected text or json)"),
        }
    }
}

/// Apply an override value to a config field. Unparseable values are logged and skipped.
fn apply_override<T>(var: &str, value: Option<String>, target: &mut T)
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Some(v) = value {
        match v.parse() {
            Ok(parsed) => *target = parsed,
            Err(e) => tracing::warn!("ignoring {var}={v:?}: {e}"),
        }
    }
}

/// Look up an override in the process environment.
pub fn env_var(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

impl RoutesConfig {
    /// Path of the config file inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load `routes.toml` from `dir`, falling back to defaults if it does not exist.
    /// Overrides are applied separately with [`Self::with_overrides`].
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        if path.exists() {
            Self::load_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicit config file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Parse config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse routes config")
    }

    /// Apply `ROUTES_START` and `ROUTES_OUTPUT_FORMAT` as returned by `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        apply_override("ROUTES_START", lookup("ROUTES_START"), &mut self.network.start);
        apply_override(
            "ROUTES_OUTPUT_FORMAT",
            lookup("ROUTES_OUTPUT_FORMAT"),
            &mut self.output.format,
        );
        self
    }

    /// Check that the start airport is set and listed.
    ///
    /// Codes compare trimmed, the same way [`crate::network::RouteNetwork`] registers them.
    pub fn validate(&self) -> Result<()> {
        let start = self.network.start.trim();
        if start.is_empty() {
            anyhow::bail!("network.start must name the starting airport");
        }
        if !self.network.airports.iter().any(|a| a.trim() == start) {
            anyhow::bail!("start airport {start} is not listed in network.airports");
        }
        Ok(())
    }
}
