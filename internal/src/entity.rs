//! Stored domain model.

use chrono::{DateTime, Utc};

/// A persisted message.
///
/// Identity and creation timestamp are owned by the storage layer: both are
/// `None` until the entity is first saved, assigned exactly once on insert,
/// and never overwritten by later updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Storage-assigned identifier
    pub id: Option<i64>,
    /// Set by storage at first persistence
    pub created_at: Option<DateTime<Utc>>,
    /// Text content
    pub message: String,
}

impl Message {
    /// Create a not-yet-persisted message with the given content.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: None,
            created_at: None,
            message: message.into(),
        }
    }
}
