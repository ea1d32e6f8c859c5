//! Metrics primitives backed by the `prometheus` crate.
//!
//! - `MetricsRegistry`: the process-wide registry, built once and passed by handle
//! - `RequestCounter`: cloneable handle over `http_requests_total{method,route,status}`
//! - `RuntimeCollector`: pluggable source of default runtime metrics

pub mod counter;
pub mod registry;
pub mod runtime;

pub use counter::{RequestCounter, RequestLabels, REQUESTS_HELP, REQUESTS_LABELS, REQUESTS_NAME};
pub use registry::{MetricsOptions, MetricsRegistry, CONTENT_TYPE};
pub use runtime::{NoRuntimeMetrics, ProcessMetrics, RuntimeCollector};
