//! Service layer: validation and forwarding to the internal service.
//!
//! The service owns no storage. It validates requests, delegates every
//! operation to the configured [`MessageGateway`] and wraps gateway failures
//! in an opaque upstream error. Callers of this tier never learn which
//! status the internal service answered with.

use std::sync::Arc;
use tracing::error;

use crate::client::{GatewayError, MessageGateway};
use crate::dto::MessageDto;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Upstream {
        message: String,
        #[source]
        source: GatewayError,
    },
}

/// CRUD service for messages, backed by the internal service.
///
/// Stateless: validation happens here, everything else upstream.
#[derive(Clone)]
pub struct MessageService {
    gateway: Arc<dyn MessageGateway>,
}

impl MessageService {
    /// Create a new service over the given gateway.
    pub fn new(gateway: Arc<dyn MessageGateway>) -> Self {
        Self { gateway }
    }

    /// Create a message upstream.
    pub async fn create(&self, representation: MessageDto) -> ServiceResult<MessageDto> {
        representation.validate().map_err(ServiceError::Validation)?;

        self.gateway
            .create_message(&representation)
            .await
            .map_err(|e| {
                error!("Failed to create message upstream: {}", e);
                ServiceError::Upstream {
                    message: "Error creating a new message".to_string(),
                    source: e,
                }
            })
    }

    /// Replace the content of an existing message upstream.
    pub async fn update(&self, id: i64, representation: MessageDto) -> ServiceResult<MessageDto> {
        representation.validate().map_err(ServiceError::Validation)?;

        self.gateway
            .update_message(id, &representation)
            .await
            .map_err(|e| {
                error!("Failed to update message {} upstream: {}", id, e);
                ServiceError::Upstream {
                    message: "Error updating an existing message".to_string(),
                    source: e,
                }
            })
    }

    /// Retrieve a single message by id.
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<MessageDto> {
        self.gateway.get_message_by_id(id).await.map_err(|e| {
            error!("Failed to retrieve message {} upstream: {}", id, e);
            ServiceError::Upstream {
                message: format!("Error retrieving message with id: {}", id),
                source: e,
            }
        })
    }

    /// Retrieve all messages.
    pub async fn find_all(&self) -> ServiceResult<Vec<MessageDto>> {
        self.gateway.get_all_messages().await.map_err(|e| {
            error!("Failed to retrieve messages upstream: {}", e);
            ServiceError::Upstream {
                message: "Error retrieving all existing messages".to_string(),
                source: e,
            }
        })
    }

    /// Delete a single message by id.
    pub async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        self.gateway.delete_message(id).await.map_err(|e| {
            error!("Failed to delete message {} upstream: {}", id, e);
            ServiceError::Upstream {
                message: format!("Error deleting message with id: {}", id),
                source: e,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GatewayResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dto(message: &str) -> MessageDto {
        MessageDto {
            id: None,
            message: message.to_string(),
        }
    }

    /// Answers every call with a canned success while counting calls.
    struct CountingGateway {
        creates: AtomicUsize,
        updates: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl CountingGateway {
        fn new() -> Self {
            Self {
                creates: AtomicUsize::new(0),
                updates: AtomicUsize::new(0),
                deletes: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MessageGateway for CountingGateway {
        async fn health_check(&self) -> GatewayResult<bool> {
            Ok(true)
        }

        async fn create_message(&self, message: &MessageDto) -> GatewayResult<MessageDto> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(MessageDto {
                id: Some(1),
                message: message.message.clone(),
            })
        }

        async fn update_message(&self, id: i64, message: &MessageDto) -> GatewayResult<MessageDto> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            Ok(MessageDto {
                id: Some(id),
                message: message.message.clone(),
            })
        }

        async fn get_message_by_id(&self, id: i64) -> GatewayResult<MessageDto> {
            Ok(MessageDto {
                id: Some(id),
                message: "stored".to_string(),
            })
        }

        async fn get_all_messages(&self) -> GatewayResult<Vec<MessageDto>> {
            Ok(vec![
                MessageDto {
                    id: Some(1),
                    message: "first".to_string(),
                },
                MessageDto {
                    id: Some(2),
                    message: "second".to_string(),
                },
            ])
        }

        async fn delete_message(&self, _id: i64) -> GatewayResult<()> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Fails every call with the given upstream status.
    struct FailingGateway {
        status: u16,
    }

    impl FailingGateway {
        fn error(&self) -> GatewayError {
            GatewayError::Status {
                status: self.status,
                body: "forced failure".to_string(),
            }
        }
    }

    #[async_trait]
    impl MessageGateway for FailingGateway {
        async fn health_check(&self) -> GatewayResult<bool> {
            Ok(false)
        }

        async fn create_message(&self, _message: &MessageDto) -> GatewayResult<MessageDto> {
            Err(self.error())
        }

        async fn update_message(
            &self,
            _id: i64,
            _message: &MessageDto,
        ) -> GatewayResult<MessageDto> {
            Err(self.error())
        }

        async fn get_message_by_id(&self, _id: i64) -> GatewayResult<MessageDto> {
            Err(self.error())
        }

        async fn get_all_messages(&self) -> GatewayResult<Vec<MessageDto>> {
            Err(self.error())
        }

        async fn delete_message(&self, _id: i64) -> GatewayResult<()> {
            Err(self.error())
        }
    }

    #[tokio::test]
    async fn create_returns_upstream_representation() {
        let gateway = Arc::new(CountingGateway::new());
        let service = MessageService::new(gateway.clone());

        let created = service.create(dto("Created message")).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.message, "Created message");
        assert_eq!(gateway.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_rejects_blank_message_without_calling_upstream() {
        let gateway = Arc::new(CountingGateway::new());
        let service = MessageService::new(gateway.clone());

        let err = service.create(dto("   ")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(gateway.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_wraps_gateway_failure_as_upstream() {
        let service = MessageService::new(Arc::new(FailingGateway { status: 503 }));

        let err = service.create(dto("doomed")).await.unwrap_err();

        match err {
            ServiceError::Upstream { message, source } => {
                assert_eq!(message, "Error creating a new message");
                assert!(matches!(source, GatewayError::Status { status: 503, .. }));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_returns_upstream_representation() {
        let gateway = Arc::new(CountingGateway::new());
        let service = MessageService::new(gateway.clone());

        let updated = service.update(4, dto("after")).await.unwrap();

        assert_eq!(updated.id, Some(4));
        assert_eq!(updated.message, "after");
        assert_eq!(gateway.updates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_rejects_blank_message_without_calling_upstream() {
        let gateway = Arc::new(CountingGateway::new());
        let service = MessageService::new(gateway.clone());

        let err = service.update(4, dto("")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(gateway.updates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_missing_id_surfaces_as_upstream() {
        let service = MessageService::new(Arc::new(FailingGateway { status: 404 }));

        let err = service.update(42, dto("orphan")).await.unwrap_err();

        match err {
            ServiceError::Upstream { message, source } => {
                assert_eq!(message, "Error updating an existing message");
                assert!(matches!(source, GatewayError::Status { status: 404, .. }));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_upstream_representation() {
        let service = MessageService::new(Arc::new(CountingGateway::new()));

        let found = service.find_by_id(9).await.unwrap();

        assert_eq!(found.id, Some(9));
        assert_eq!(found.message, "stored");
    }

    #[tokio::test]
    async fn find_by_id_missing_surfaces_as_upstream() {
        let service = MessageService::new(Arc::new(FailingGateway { status: 404 }));

        let err = service.find_by_id(42).await.unwrap_err();

        match err {
            ServiceError::Upstream { message, source } => {
                assert_eq!(message, "Error retrieving message with id: 42");
                assert!(matches!(source, GatewayError::Status { status: 404, .. }));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn find_all_returns_upstream_list() {
        let service = MessageService::new(Arc::new(CountingGateway::new()));

        let all = service.find_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "first");
        assert_eq!(all[1].message, "second");
    }

    #[tokio::test]
    async fn find_all_wraps_gateway_failure_as_upstream() {
        let service = MessageService::new(Arc::new(FailingGateway { status: 500 }));

        let err = service.find_all().await.unwrap_err();

        match err {
            ServiceError::Upstream { message, .. } => {
                assert_eq!(message, "Error retrieving all existing messages");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_forwards_to_upstream() {
        let gateway = Arc::new(CountingGateway::new());
        let service = MessageService::new(gateway.clone());

        service.delete_by_id(3).await.unwrap();

        assert_eq!(gateway.deletes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn delete_wraps_gateway_failure_as_upstream() {
        let service = MessageService::new(Arc::new(FailingGateway { status: 409 }));

        let err = service.delete_by_id(3).await.unwrap_err();

        match err {
            ServiceError::Upstream { message, source } => {
                assert_eq!(message, "Error deleting message with id: 3");
                assert!(matches!(source, GatewayError::Status { status: 409, .. }));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }
}
