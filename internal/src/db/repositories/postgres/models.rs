use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::messages;
use crate::entity::Message;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    pub message: String,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: Some(row.id),
            created_at: Some(row.created_at),
            message: row.message,
        }
    }
}
