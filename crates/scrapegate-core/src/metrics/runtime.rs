//! Default runtime metrics.
//!
//! The registry asks a `RuntimeCollector` for its instruments once, at
//! construction. The concrete source is swappable so tests (and platforms
//! without `/proc`) can provide their own.

use prometheus::core::Collector;

/// Source of the default runtime metric block.
pub trait RuntimeCollector {
    fn collect_runtime_metrics(&self) -> Vec<Box<dyn Collector>>;
}

/// `process_*` metrics for the current process (cpu, memory, fds, threads, start time).
///
/// Backed by `/proc`, so the set is empty outside Linux.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessMetrics;

impl RuntimeCollector for ProcessMetrics {
    #[cfg(target_os = "linux")]
    fn collect_runtime_metrics(&self) -> Vec<Box<dyn Collector>> {
        vec![Box::new(prometheus::process_collector::ProcessCollector::for_self())]
    }

    #[cfg(not(target_os = "linux"))]
    fn collect_runtime_metrics(&self) -> Vec<Box<dyn Collector>> {
        tracing::warn!("process metrics are only available on linux; default metric set is empty");
        Vec::new()
    }
}

/// Empty set; used when default metrics are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRuntimeMetrics;

impl RuntimeCollector for NoRuntimeMetrics {
    fn collect_runtime_metrics(&self) -> Vec<Box<dyn Collector>> {
        Vec::new()
    }
}
