use serde::{Deserialize, Serialize};

/// Body of `/api/info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub hostname: String,
    pub version: String,
    pub time: String,
}

/// Healthy body of `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Body of `/health` while the simulated failure is active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthFailure {
    pub status: String,
}

/// Body of `/ready`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
}
