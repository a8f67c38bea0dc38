//! API response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgement returned by customer registration
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}
