//! HTTP helpers shared by both routers: error mapping, root status, tracing.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};

use hostpulse_core::error::{ClientCode, HostPulseError};
use hostpulse_core::protocol::{ErrorBody, StatusBody};

/// `HostPulseError` as an HTTP response: status code + `ErrorBody` JSON.
#[derive(Debug)]
pub struct ApiError(pub HostPulseError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<HostPulseError> for ApiError {
    fn from(e: HostPulseError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_server_side() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}

/// Root health-check body for `service`.
pub fn service_status(service: &str) -> Json<StatusBody> {
    Json(StatusBody::ok(service))
}

/// Per-request span + latency logging.
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn sampling_error_renders_500_with_internal_code() {
        let resp = ApiError(HostPulseError::Sampling("no cpus".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "INTERNAL");
        assert_eq!(body.message, "host sampling failed: no cpus");
    }

    #[test]
    fn config_errors_map_to_400() {
        assert_eq!(ApiError(HostPulseError::UnsupportedVersion).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError(HostPulseError::BadRequest("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
