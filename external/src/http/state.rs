//! Application state for the HTTP server.

use std::sync::Arc;

use crate::client::MessageGateway;
use crate::service::MessageService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service instance for message operations
    pub service: MessageService,
    /// Gateway instance, used directly by the health endpoint
    pub gateway: Arc<dyn MessageGateway>,
}

impl AppState {
    /// Create a new application state with the given service and gateway.
    pub fn new(service: MessageService, gateway: Arc<dyn MessageGateway>) -> Self {
        Self { service, gateway }
    }

    /// Create a state with a [`MessageService`] over the given gateway.
    pub fn with_gateway(gateway: Arc<dyn MessageGateway>) -> Self {
        let service = MessageService::new(gateway.clone());
        Self { service, gateway }
    }
}
