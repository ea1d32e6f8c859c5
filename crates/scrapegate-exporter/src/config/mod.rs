//! Exporter config loader (strict parsing + env overrides).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use scrapegate_core::error::{Result, ScrapegateError};

pub use schema::{ExporterConfig, ExporterSection, MetricsSection, PreregisteredSeries};

/// Config file used when neither a CLI argument nor `SCRAPEGATE_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "scrapegate.yaml";

pub const ENV_CONFIG: &str = "SCRAPEGATE_CONFIG";
pub const ENV_LISTEN: &str = "SCRAPEGATE_LISTEN";
pub const ENV_METRICS_PATH: &str = "SCRAPEGATE_METRICS_PATH";

/// Where the config comes from, and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: String,
    pub required: bool,
}

/// CLI argument wins over `SCRAPEGATE_CONFIG`; otherwise the optional default path.
pub fn resolve_source(arg: Option<String>, env: impl Fn(&str) -> Option<String>) -> ConfigSource {
    match arg.or_else(|| env(ENV_CONFIG)) {
        Some(path) => ConfigSource { path, required: true },
        None => ConfigSource {
            path: DEFAULT_CONFIG_PATH.to_string(),
            required: false,
        },
    }
}

/// Load, override from the environment, then validate.
pub fn load(source: &ConfigSource, env: impl Fn(&str) -> Option<String>) -> Result<ExporterConfig> {
    let mut cfg = match fs::read_to_string(&source.path) {
        Ok(s) => parse(&s)?,
        Err(e) if e.kind() == ErrorKind::NotFound && !source.required => {
            tracing::info!(path = %source.path, "no config file; using defaults");
            ExporterConfig::default()
        }
        Err(e) => {
            return Err(ScrapegateError::Config(format!(
                "read config {} failed: {e}",
                source.path
            )))
        }
    };
    apply_overrides(&mut cfg, env);
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse(s: &str) -> Result<ExporterConfig> {
    serde_yaml::from_str(s).map_err(|e| ScrapegateError::Config(format!("invalid yaml: {e}")))
}

/// `SCRAPEGATE_LISTEN` and `SCRAPEGATE_METRICS_PATH` replace their file values.
pub fn apply_overrides(cfg: &mut ExporterConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(listen) = env(ENV_LISTEN) {
        cfg.exporter.listen = listen;
    }
    if let Some(path) = env(ENV_METRICS_PATH) {
        cfg.exporter.metrics_path = path;
    }
}
