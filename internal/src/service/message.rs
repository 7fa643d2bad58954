//! Message implementation of the CRUD service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use super::crud::CrudService;
use super::error::{ServiceError, ServiceResult};
use crate::db::repository::{MessageRepository, RepositoryError};
use crate::dto::MessageDto;
use crate::mapper;

/// CRUD service for messages.
///
/// Stateless: validation and mapping happen here, all state lives in the
/// injected repository.
pub struct MessageService {
    repository: Arc<MessageRepository>,
}

impl MessageService {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<MessageRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CrudService for MessageService {
    type Representation = MessageDto;

    async fn create(&self, representation: MessageDto) -> ServiceResult<MessageDto> {
        representation.validate().map_err(ServiceError::Validation)?;

        let entity = mapper::to_entity(&representation);
        let saved = self.repository.save(entity).await.map_err(|e| {
            error!("Failed to persist a new message: {}", e);
            ServiceError::Persistence {
                message: "Error persisting a new message".to_string(),
                source: e,
            }
        })?;

        Ok(mapper::to_representation(&saved))
    }

    async fn update(&self, id: i64, representation: MessageDto) -> ServiceResult<MessageDto> {
        representation.validate().map_err(ServiceError::Validation)?;

        let mut entity = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("Failed to load message {} for update: {}", id, e);
                ServiceError::Persistence {
                    message: "Error updating an existing message".to_string(),
                    source: e,
                }
            })?
            .ok_or(ServiceError::NotFound(id))?;

        mapper::apply_representation(&representation, &mut entity);

        let saved = self.repository.save(entity).await.map_err(|e| {
            error!("Failed to update message {}: {}", id, e);
            ServiceError::Persistence {
                message: "Error updating an existing message".to_string(),
                source: e,
            }
        })?;

        Ok(mapper::to_representation(&saved))
    }

    async fn find_by_id(&self, id: i64) -> ServiceResult<MessageDto> {
        let entity = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("Failed to retrieve message {}: {}", id, e);
                ServiceError::Persistence {
                    message: format!("Error retrieving message with id: {}", id),
                    source: e,
                }
            })?
            .ok_or(ServiceError::NotFound(id))?;

        Ok(mapper::to_representation(&entity))
    }

    async fn find_all(&self) -> ServiceResult<Vec<MessageDto>> {
        let entities = self.repository.find_all().await.map_err(|e| {
            error!("Failed to retrieve messages: {}", e);
            ServiceError::Persistence {
                message: "Error retrieving all existing messages".to_string(),
                source: e,
            }
        })?;

        Ok(entities.iter().map(mapper::to_representation).collect())
    }

    async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("Failed to load message {} for deletion: {}", id, e);
                ServiceError::Persistence {
                    message: format!("Error deleting message with id: {}", id),
                    source: e,
                }
            })?
            .ok_or(ServiceError::NotFound(id))?;

        self.repository.delete_by_id(id).await.map_err(|e| {
            error!("Failed to delete message {}: {}", id, e);
            match e {
                RepositoryError::IntegrityError(_) => ServiceError::Integrity {
                    message: format!("Error deleting message with id: {}", id),
                    source: e,
                },
                RepositoryError::NotFound(_) => ServiceError::NotFound(id),
                other => ServiceError::Persistence {
                    message: format!("Error deleting message with id: {}", id),
                    source: other,
                },
            }
        })
    }
}
