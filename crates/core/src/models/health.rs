use serde::{Deserialize, Serialize};

/// Body of the `GET /api/health` response served by the host server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Proofolio API is running".to_string(),
        }
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::ok()
    }
}
