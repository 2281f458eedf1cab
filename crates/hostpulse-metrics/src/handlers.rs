use axum::{extract::State, Json};

use hostpulse_core::protocol::{MetricsBody, StatusBody};
use hostpulse_server::http::{service_status, ApiError};

use crate::{app_state::AppState, SERVICE_NAME};

pub async fn root() -> Json<StatusBody> {
    service_status(SERVICE_NAME)
}

/// Sample the host and report utilization. Suspends for the sampler's CPU
/// interval.
pub async fn metrics(State(state): State<AppState>) -> Result<Json<MetricsBody>, ApiError> {
    let sample = state.sampler().sample().await?;
    let body = MetricsBody::from(sample);
    tracing::debug!(
        cpu = body.cpu_percent,
        mem = body.memory_percent,
        "host sampled"
    );
    Ok(Json(body))
}
