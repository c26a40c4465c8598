use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness only; service2 is not probed.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "service1",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
