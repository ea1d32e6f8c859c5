//! Top-level facade crate for scrapegate.
//!
//! Re-exports the core metrics types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use scrapegate_core::*;
}

pub mod exporter {
    pub use scrapegate_exporter::*;
}
