//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::{CrudRepository, RepositoryError, RepositoryResult};
use crate::entity::Message;

/// In-memory local repository.
///
/// Rows live in a map guarded by an `RwLock`; ids come from a monotonically
/// increasing counter so storage order equals id order.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    messages: HashMap<i64, Message>,

    // ID counter
    next_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            messages: HashMap::new(),
            next_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of messages stored.
    pub fn message_count(&self) -> usize {
        self.data.read().unwrap().messages.len()
    }

    /// Check if a message exists.
    pub fn has_message(&self, id: i64) -> bool {
        self.data.read().unwrap().messages.contains_key(&id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Database is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrudRepository for LocalRepository {
    type Entity = Message;

    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn save(&self, mut entity: Message) -> RepositoryResult<Message> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        match entity.id {
            Some(id) => {
                let stored = data.messages.get(&id).ok_or_else(|| {
                    RepositoryError::NotFound(format!("Message {} not found", id))
                })?;
                // Creation timestamp is assigned once and kept on update.
                entity.created_at = stored.created_at;
                data.messages.insert(id, entity.clone());
                Ok(entity)
            }
            None => {
                let id = data.next_id;
                data.next_id += 1;
                entity.id = Some(id);
                if entity.created_at.is_none() {
                    entity.created_at = Some(Utc::now());
                }
                data.messages.insert(id, entity.clone());
                Ok(entity)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Message>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.messages.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Message>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        // HashMap iteration order is arbitrary; list in id order.
        let mut ids: Vec<i64> = data.messages.keys().copied().collect();
        ids.sort_unstable();

        Ok(ids
            .into_iter()
            .filter_map(|id| data.messages.get(&id).cloned())
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        if data.messages.remove(&id).is_none() {
            return Err(RepositoryError::NotFound(format!(
                "Message {} not found",
                id
            )));
        }
        Ok(())
    }
}
