//! Repository trait definition for message storage.
//!
//! The trait abstracts database operations behind a generic CRUD interface so
//! storage backends can be swapped without touching the service layer.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//!
//! # Implementations
//!
//! - `repositories::postgres`: PostgreSQL implementation with Diesel ORM
//! - `repositories::local`: In-memory implementation for unit testing and
//!   local development

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::entity::Message;

/// Generic repository trait for CRUD database operations.
///
/// The associated `Entity` type is the stored domain object. Identity and
/// creation timestamp handling is part of the contract: `save` assigns both
/// on insert and never overwrites the creation timestamp on update.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// Stored domain object this repository manages.
    type Entity;

    // ==================== Health & Connection ====================

    /// Check if the storage backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is reachable
    /// - `Ok(false)` if the backend is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== CRUD Operations ====================

    /// Persist an entity.
    ///
    /// Inserts when the entity has no id, assigning identity and creation
    /// timestamp. Updates the existing row when an id is present, leaving the
    /// creation timestamp untouched.
    ///
    /// # Arguments
    /// * `entity` - The entity to persist
    ///
    /// # Returns
    /// * `Ok(Entity)` - The stored entity with identity fields populated
    /// * `Err(RepositoryError::NotFound)` - If updating a row that does not exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn save(&self, entity: Self::Entity) -> RepositoryResult<Self::Entity>;

    /// Retrieve a single entity by id.
    ///
    /// # Arguments
    /// * `id` - The id of the entity to retrieve
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - The stored entity
    /// * `Ok(None)` - If no row has this id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Self::Entity>>;

    /// Retrieve all stored entities in storage order.
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - All rows, ordered by assigned id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn find_all(&self) -> RepositoryResult<Vec<Self::Entity>>;

    /// Delete a single entity by id.
    ///
    /// # Arguments
    /// * `id` - The id of the entity to delete
    ///
    /// # Returns
    /// * `Ok(())` - If the row was deleted
    /// * `Err(RepositoryError::NotFound)` - If no row has this id
    /// * `Err(RepositoryError::IntegrityError)` - If a storage constraint rejects the delete
    /// * `Err(RepositoryError)` - If the operation fails
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}

/// Object-safe alias for the message repository used throughout the crate.
pub type MessageRepository = dyn CrudRepository<Entity = Message>;
