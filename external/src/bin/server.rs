//! External Message Service Binary
//!
//! This is the main entry point for the external REST API server.
//! It builds the gateway to the internal service, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! MESSAGES_INTERNAL_URL=http://localhost:8080 \
//!   cargo run --bin external-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8081)
//! - `MESSAGES_INTERNAL_URL`: Base URL of the internal service (required)
//! - `GATEWAY_TIMEOUT_SEC`: Upstream request timeout in seconds (default: 30)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use messages_external::client::{GatewayConfig, HttpMessageGateway};
use messages_external::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting external message service");

    // Build the gateway to the internal service
    let config = GatewayConfig::from_env().map_err(anyhow::Error::msg)?;
    let gateway = HttpMessageGateway::new(&config)?;
    info!("Gateway initialized for {}", config.base_url);

    // Create application state
    let state = AppState::with_gateway(Arc::new(gateway));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8081);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
