//! Explicit mapping between wire representations and stored entities.
//!
//! Every field is copied by hand so the ownership rules stay visible: the
//! storage layer owns `id` and `created_at`, and no mapping function here
//! will ever set or reset them from client input.

use crate::dto::MessageDto;
use crate::entity::Message;

/// Build a fresh entity from a representation.
///
/// Identity and creation timestamp are left unset for the storage layer to
/// assign on first save. A client-supplied id is deliberately ignored.
pub fn to_entity(representation: &MessageDto) -> Message {
    Message {
        id: None,
        created_at: None,
        message: representation.message.clone(),
    }
}

/// Build the wire representation of a stored entity.
pub fn to_representation(entity: &Message) -> MessageDto {
    MessageDto {
        id: entity.id,
        message: entity.message.clone(),
    }
}

/// Overlay the mutable fields of a representation onto an existing entity.
///
/// Only the content changes; identity and creation timestamp keep their
/// stored values.
pub fn apply_representation(representation: &MessageDto, entity: &mut Message) {
    entity.message = representation.message.clone();
}
