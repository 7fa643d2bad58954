//! Service layer for message operations.
//!
//! The service sits between the HTTP handlers and the repository: it
//! validates representations, maps them to entities and translates
//! repository failures into the service error taxonomy.
//!
//! # Module Organization
//!
//! - [`crud`]: Generic CRUD service trait
//! - [`error`]: Error types for service operations
//! - [`message`]: Message implementation of the CRUD service

pub mod crud;
pub mod error;
pub mod message;

pub use crud::CrudService;
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
