//! scrapegate exporter
//!
//! - GET /metrics : default process metrics + `http_requests_total`
//! - GET /healthz : liveness
//! - Listens on 0.0.0.0:8001 unless configured otherwise
//!
//! Startup errors (bad config, port in use) exit non-zero.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use scrapegate_core::error::Result;
use scrapegate_exporter::{app_state, config, router, server};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "scrapegate-exporter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let env = |key: &str| std::env::var(key).ok();

    let source = config::resolve_source(std::env::args().nth(1), env);
    let cfg = config::load(&source, env)?;
    let listen = cfg.exporter.listen_addr()?;

    tracing::info!(
        config = %source.path,
        %listen,
        metrics_path = %cfg.exporter.metrics_path,
        default_metrics = cfg.metrics.default_metrics,
        "scrapegate-exporter starting"
    );

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = server::bind(listen).await?;
    server::serve(listener, app, server::shutdown_signal()).await
}
