//! Data Transfer Objects for the message API.
//!
//! The same shape travels in both directions: requests and responses on our
//! own REST surface, and requests and responses exchanged with the internal
//! service. The external tier has no entity of its own, so the DTO is the
//! only message type in this crate.

use serde::{Deserialize, Serialize};

/// Wire representation of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    /// Identifier assigned by the internal service; absent on create requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Text content; must not be blank
    pub message: String,
}

impl MessageDto {
    /// Validate the representation for create and update requests.
    ///
    /// # Returns
    /// * `Ok(())` if the content is acceptable
    /// * `Err(reason)` if the content is empty or whitespace-only
    pub fn validate(&self) -> Result<(), String> {
        if self.message.trim().is_empty() {
            return Err("message must not be blank".to_string());
        }
        Ok(())
    }
}
