//! Metrics registry and exposition rendering.

use prometheus::{Encoder, Registry, TextEncoder};

use crate::error::{Result, ScrapegateError};
use crate::metrics::counter::{RequestCounter, RequestLabels};
use crate::metrics::runtime::RuntimeCollector;

/// Content type of the text exposition format.
pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Registry construction options.
#[derive(Debug, Clone, Default)]
pub struct MetricsOptions {
    /// Prefix for the request counter (`<ns>_http_requests_total`).
    pub namespace: Option<String>,
    /// Series created at zero during construction.
    pub preregister: Vec<RequestLabels>,
}

/// Owns every instrument the exporter serves.
///
/// Build one at startup and share it (`Arc`) with the scrape handler;
/// hand `request_counter()` clones to request-handling code.
pub struct MetricsRegistry {
    registry: Registry,
    requests: RequestCounter,
}

impl MetricsRegistry {
    pub fn new(opts: &MetricsOptions, runtime: &dyn RuntimeCollector) -> Result<Self> {
        let registry = Registry::new();

        for collector in runtime.collect_runtime_metrics() {
            registry.register(collector)?;
        }

        let requests = RequestCounter::new(opts.namespace.as_deref())?;
        registry.register(Box::new(requests.collector()))?;

        for labels in &opts.preregister {
            requests.touch(labels);
        }

        tracing::debug!(
            namespace = opts.namespace.as_deref().unwrap_or(""),
            preregistered = opts.preregister.len(),
            "metrics registry ready"
        );

        Ok(Self { registry, requests })
    }

    /// Handle for recording requests.
    pub fn request_counter(&self) -> RequestCounter {
        self.requests.clone()
    }

    /// Shorthand for `request_counter().increment(..)`.
    pub fn increment(&self, method: &str, route: &str, status: &str) {
        self.requests.increment(method, route, status);
    }

    /// Gather every collector and encode the snapshot in the text exposition format.
    /// Reading never changes counter values.
    pub fn render(&self) -> Result<String> {
        let families = self.registry.gather();
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut buf)
            .map_err(|e| ScrapegateError::Render(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| ScrapegateError::Render(e.to_string()))
    }
}
