//! HTTP server module for the external message service.
//!
//! This module provides an axum-based HTTP server that exposes the message
//! CRUD operations as a REST API. Handlers delegate to the service layer,
//! which forwards every operation to the internal service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, tracing, error mapping                           │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (service)                                  │
//! │  - Validation and upstream error folding                  │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Gateway (client/)                                        │
//! │  - HttpMessageGateway -> internal service REST API        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
