//! Shared application state for the exporter.
//!
//! The registry is built here once and handed out by `Arc`; there is no
//! process-global registry.

use std::sync::Arc;

use scrapegate_core::error::Result;
use scrapegate_core::{MetricsRegistry, NoRuntimeMetrics, ProcessMetrics, RequestCounter, RuntimeCollector};

use crate::config::ExporterConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<MetricsRegistry>,
}

struct AppStateInner {
    cfg: ExporterConfig,
}

impl AppState {
    /// Build state with the runtime collector the config asks for.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        if cfg.metrics.default_metrics {
            Self::with_runtime(cfg, &ProcessMetrics)
        } else {
            Self::with_runtime(cfg, &NoRuntimeMetrics)
        }
    }

    /// Build state with an explicit runtime collector (tests, embedders).
    pub fn with_runtime(cfg: ExporterConfig, runtime: &dyn RuntimeCollector) -> Result<Self> {
        let registry = MetricsRegistry::new(&cfg.metrics.options(), runtime)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            registry: Arc::new(registry),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn request_counter(&self) -> RequestCounter {
        self.registry.request_counter()
    }
}
