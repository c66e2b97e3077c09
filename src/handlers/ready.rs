use crate::types::ReadyResponse;
use axum::Json;

/// Readiness endpoint
///
/// Called by orchestration readiness probes. The service has no startup
/// dependencies to wait on, so this always reports ready.
pub async fn ready_handler() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready".to_string(),
    })
}
