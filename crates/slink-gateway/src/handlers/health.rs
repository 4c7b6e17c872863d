use crate::model::{HealthResponse, MessageResponse};
use axum::http::StatusCode;
use axum::Json;

pub async fn index_handler() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "shorten your url",
        }),
    )
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
