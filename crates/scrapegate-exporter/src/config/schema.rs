use std::net::SocketAddr;

use serde::Deserialize;
use scrapegate_core::error::{Result, ScrapegateError};
use scrapegate_core::{MetricsOptions, RequestLabels};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ScrapegateError::UnsupportedVersion);
        }
        self.exporter.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    /// Count scrapes and health checks in `http_requests_total` too.
    #[serde(default)]
    pub count_own_requests: bool,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
            count_own_requests: false,
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.metrics_path.starts_with('/') {
            return Err(ScrapegateError::Config(
                "exporter.metrics_path must start with '/'".into(),
            ));
        }
        if self.metrics_path == "/healthz" {
            return Err(ScrapegateError::Config(
                "exporter.metrics_path must not shadow /healthz".into(),
            ));
        }
        // literal segments only; axum treats these as captures/wildcards
        if self.metrics_path.contains(&[':', '*', '{', '}'][..]) {
            return Err(ScrapegateError::Config(format!(
                "exporter.metrics_path must be a literal path: {}",
                self.metrics_path
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ScrapegateError::Config(format!(
                "exporter.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8001".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_true")]
    pub default_metrics: bool,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub preregister: Vec<PreregisteredSeries>,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            default_metrics: true,
            namespace: None,
            preregister: Vec::new(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if let Some(ns) = self.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            if !is_metric_name(ns) {
                return Err(ScrapegateError::Config(format!(
                    "metrics.namespace is not a valid metric name prefix: {ns}"
                )));
            }
        }
        for s in &self.preregister {
            if s.method.is_empty() || s.route.is_empty() || s.status.is_empty() {
                return Err(ScrapegateError::Config(
                    "metrics.preregister entries need non-empty method, route and status".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn options(&self) -> MetricsOptions {
        MetricsOptions {
            namespace: self.namespace.clone().filter(|ns| !ns.is_empty()),
            preregister: self
                .preregister
                .iter()
                .map(|s| RequestLabels::new(&s.method, &s.route, &s.status))
                .collect(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn is_metric_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Series created at zero on startup.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreregisteredSeries {
    pub method: String,
    pub route: String,
    pub status: String,
}
