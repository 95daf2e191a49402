use serde::Serialize;

use sampleapi_core::Violation;

/// API version reported by the health endpoints.
pub const API_VERSION: &str = "0.1.0";

// -------------------------
// Response DTOs
// -------------------------

/// Body of `GET /health` and `GET /health/ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: API_VERSION,
        }
    }

    pub fn ready() -> Self {
        Self {
            status: "ready",
            version: API_VERSION,
        }
    }
}

/// Error body shared by every non-2xx JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Violation>,
}
