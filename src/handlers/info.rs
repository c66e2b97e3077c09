use crate::state::AppState;
use crate::types::InfoResponse;
use axum::extract::State;
use axum::Json;
use chrono::Local;
use sysinfo::System;

/// Info endpoint
///
/// Returns the host's network name, the configured version, and the
/// current local wall-clock time.
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
        version: state.config.version.clone(),
        time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}
