//! Gateway trait definition for the internal message service.
//!
//! The trait abstracts the upstream service behind the CRUD operations the
//! external API offers, so the transport can be swapped or faked without
//! touching the service layer.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for gateway operations
//! - [`remote`]: HTTP implementation backed by `reqwest`

pub mod error;
pub mod remote;

pub use error::{GatewayError, GatewayResult};
pub use remote::{GatewayConfig, HttpMessageGateway};

use async_trait::async_trait;

use crate::dto::MessageDto;

/// Gateway to the internal message service.
///
/// Unlike a repository, the gateway never sees a missing row as an absence:
/// the upstream service answers `404` for unknown ids, which surfaces here as
/// [`GatewayError::Status`].
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the upstream service is reachable and healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the upstream health endpoint answers with success
    /// - `Ok(false)` if it answers with a non-success status
    /// - `Err(GatewayError)` if the request cannot be completed
    async fn health_check(&self) -> GatewayResult<bool>;

    // ==================== CRUD Operations ====================

    /// Create a message upstream.
    ///
    /// # Arguments
    /// * `message` - The representation to store; `id` is ignored upstream
    ///
    /// # Returns
    /// * `Ok(MessageDto)` - The stored representation with its assigned id
    /// * `Err(GatewayError)` - If the call fails or upstream rejects it
    async fn create_message(&self, message: &MessageDto) -> GatewayResult<MessageDto>;

    /// Replace the content of an existing message upstream.
    ///
    /// # Arguments
    /// * `id` - The id of the message to update
    /// * `message` - The representation carrying the new content
    ///
    /// # Returns
    /// * `Ok(MessageDto)` - The updated representation
    /// * `Err(GatewayError::Status)` - If upstream answers with a non-success
    ///   status, `404` for unknown ids included
    async fn update_message(&self, id: i64, message: &MessageDto) -> GatewayResult<MessageDto>;

    /// Retrieve a single message by id.
    ///
    /// # Arguments
    /// * `id` - The id of the message to retrieve
    ///
    /// # Returns
    /// * `Ok(MessageDto)` - The stored representation
    /// * `Err(GatewayError::Status)` - If upstream answers with a non-success
    ///   status, `404` for unknown ids included
    async fn get_message_by_id(&self, id: i64) -> GatewayResult<MessageDto>;

    /// Retrieve all messages in upstream storage order.
    async fn get_all_messages(&self) -> GatewayResult<Vec<MessageDto>>;

    /// Delete a single message by id.
    ///
    /// # Arguments
    /// * `id` - The id of the message to delete
    ///
    /// # Returns
    /// * `Ok(())` - If upstream deleted the row
    /// * `Err(GatewayError::Status)` - If upstream answers with a non-success
    ///   status, `404` for unknown ids included
    async fn delete_message(&self, id: i64) -> GatewayResult<()>;
}
