//! Axum router wiring.

use axum::{routing::get, Router};

use hostpulse_server::http::trace_layer;

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/metrics", get(handlers::metrics))
        .layer(trace_layer())
        .with_state(state)
}
