//! Axum router wiring.
//!
//! - `<metrics_path>` (default `/metrics`): exposition text
//! - `/healthz`: liveness

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let exporter = &state.cfg().exporter;

    let router = Router::new()
        .route(&exporter.metrics_path, get(ops::metrics))
        .route("/healthz", get(ops::healthz));

    let router = if exporter.count_own_requests {
        router.layer(middleware::from_fn_with_state(
            state.request_counter(),
            ops::track::track_requests,
        ))
    } else {
        router
    };

    router.with_state(state)
}
