//! Axum router wiring.

use axum::{routing::get, Router};

use hostpulse_server::http::trace_layer;

use crate::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/ping", get(handlers::ping))
        .layer(trace_layer())
}
