use crate::state::AppState;
use crate::types::{HealthFailure, HealthResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

/// Health check endpoint
///
/// Normally returns 200 OK with the configured version and an RFC 3339
/// UTC timestamp. When the simulated-failure toggle is active and the
/// configured version matches the trigger sentinel, returns 500 so that
/// external orchestration can observe an unhealthy deployment and roll
/// it back.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    if state.config.health_failure_active() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthFailure {
                status: "failure".to_string(),
            }),
        )
            .into_response();
    }

    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.config.version.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
    .into_response()
}
