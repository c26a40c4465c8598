use crate::AppState;
use axum::{extract::State, http::HeaderMap};
use service_core::observability::extract_request_id;

pub const HELLO_SERVICE_1: &str = "Hello Service 1";

/// Body returned when service2 cannot be reached or rejects the call.
pub const DOWNSTREAM_ERROR: &str = "Error";

/// Calls service2 once, then greets. A failed call is logged and answered
/// with `"Error"`, still as 200.
pub async fn hello(State(state): State<AppState>, headers: HeaderMap) -> &'static str {
    tracing::info!("Service1 hello called");

    let request_id = extract_request_id(&headers);

    match state.service2.hello(request_id.as_deref()).await {
        Ok(body) => {
            tracing::info!("service 1 called service 2: {}", body);
            HELLO_SERVICE_1
        }
        Err(e) => {
            tracing::error!("Error communicating with service2 service: {}", e);
            DOWNSTREAM_ERROR
        }
    }
}
