//! scrapegate core: the metrics registry, the request counter, and the error
//! surface shared by the exporter and by embedding applications.
//!
//! The crate carries no transport or runtime dependencies; the HTTP side lives
//! in `scrapegate-exporter`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `ScrapegateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{Result, ScrapegateError};
pub use metrics::{
    MetricsOptions, MetricsRegistry, NoRuntimeMetrics, ProcessMetrics, RequestCounter,
    RequestLabels, RuntimeCollector,
};
