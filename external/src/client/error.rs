//! Error types for gateway operations.

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Error type for calls to the internal service
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}
