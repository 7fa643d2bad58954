//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::MessageRepository;
use crate::dto::MessageDto;
use crate::service::{CrudService, MessageService};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service instance for message operations
    pub service: Arc<dyn CrudService<Representation = MessageDto>>,
    /// Repository instance, used directly by the health endpoint
    pub repository: Arc<MessageRepository>,
}

impl AppState {
    /// Create a new application state with the given service and repository.
    pub fn new(
        service: Arc<dyn CrudService<Representation = MessageDto>>,
        repository: Arc<MessageRepository>,
    ) -> Self {
        Self {
            service,
            repository,
        }
    }

    /// Create a state with a [`MessageService`] over the given repository.
    pub fn with_repository(repository: Arc<MessageRepository>) -> Self {
        let service = Arc::new(MessageService::new(repository.clone()));
        Self {
            service,
            repository,
        }
    }
}
