//! `http_requests_total` counter.

use prometheus::{IntCounterVec, Opts};

use crate::error::Result;

/// Metric name (before namespacing).
pub const REQUESTS_NAME: &str = "http_requests_total";
/// Help text rendered on the `# HELP` line.
pub const REQUESTS_HELP: &str = "Count of HTTP requests";
/// Label names, in declaration order.
pub const REQUESTS_LABELS: [&str; 3] = ["method", "route", "status"];

/// One label combination of the request counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestLabels {
    pub method: String,
    pub route: String,
    pub status: String,
}

impl RequestLabels {
    pub fn new(method: impl Into<String>, route: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            route: route.into(),
            status: status.into(),
        }
    }
}

/// Handle to the request counter.
///
/// Cloning is cheap and every clone updates the same series, so request
/// handlers can hold their own copy. Increments are atomic.
#[derive(Clone)]
pub struct RequestCounter {
    vec: IntCounterVec,
}

impl RequestCounter {
    pub(crate) fn new(namespace: Option<&str>) -> Result<Self> {
        let mut opts = Opts::new(REQUESTS_NAME, REQUESTS_HELP);
        if let Some(ns) = namespace {
            opts = opts.namespace(ns);
        }
        let vec = IntCounterVec::new(opts, &REQUESTS_LABELS)?;
        Ok(Self { vec })
    }

    pub(crate) fn collector(&self) -> IntCounterVec {
        self.vec.clone()
    }

    /// Record one request for the given label combination.
    pub fn increment(&self, method: &str, route: &str, status: &str) {
        self.vec.with_label_values(&[method, route, status]).inc();
    }

    /// Create the series at zero without counting anything.
    pub fn touch(&self, labels: &RequestLabels) {
        let _ = self
            .vec
            .with_label_values(&[labels.method.as_str(), labels.route.as_str(), labels.status.as_str()]);
    }
}
