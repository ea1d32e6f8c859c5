//! scrapegate exporter library entry.
//!
//! Wires config, the shared metrics registry, and the axum router into the
//! metrics sidecar. Consumed by the binary (`main.rs`) and by integration tests;
//! host applications use `ops::track::track_requests` to feed the counter.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod server;
