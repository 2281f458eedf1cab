use axum::Json;

use hostpulse_core::protocol::{PongBody, StatusBody};
use hostpulse_server::http::service_status;

use crate::SERVICE_NAME;

pub async fn root() -> Json<StatusBody> {
    service_status(SERVICE_NAME)
}

pub async fn ping() -> Json<PongBody> {
    Json(PongBody::pong())
}
