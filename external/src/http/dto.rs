//! Response types specific to the HTTP API.
//!
//! The message DTO itself lives in [`crate::dto`] and is reused here.

use serde::{Deserialize, Serialize};

pub use crate::dto::MessageDto;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Internal service connection status
    pub upstream: String,
}
