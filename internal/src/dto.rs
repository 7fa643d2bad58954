//! Data Transfer Objects for the message API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The stored entity lives in [`crate::entity`]; mapping between the two is
//! done explicitly in [`crate::mapper`].

use serde::{Deserialize, Serialize};

/// Wire representation of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    /// Storage-assigned identifier; absent on create requests and never
    /// honored when supplied by a client
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
