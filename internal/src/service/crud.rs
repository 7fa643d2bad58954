//! Generic CRUD service trait.

use async_trait::async_trait;

use super::error::ServiceResult;

/// Service trait for CRUD operations on a resource.
///
/// The associated `Representation` type is the wire form of the resource.
/// Implementations own validation, representation/entity mapping and the
/// translation of storage failures; handlers stay thin pass-throughs.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CrudService: Send + Sync {
    /// Wire representation this service accepts and returns.
    type Representation;

    /// Create a new resource from a representation.
    ///
    /// # Arguments
    /// * `representation` - The resource to create; a supplied id is ignored
    ///
    /// # Returns
    /// * `Ok(Representation)` - The stored resource with its assigned id
    /// * `Err(ServiceError::Validation)` - If the representation is invalid
    /// * `Err(ServiceError::Persistence)` - If storage fails
    async fn create(
        &self,
        representation: Self::Representation,
    ) -> ServiceResult<Self::Representation>;

    /// Update an existing resource.
    ///
    /// # Arguments
    /// * `id` - The id of the resource to update
    /// * `representation` - The new content
    ///
    /// # Returns
    /// * `Ok(Representation)` - The updated resource
    /// * `Err(ServiceError::Validation)` - If the representation is invalid
    /// * `Err(ServiceError::NotFound)` - If no resource has this id
    /// * `Err(ServiceError::Persistence)` - If storage fails
    async fn update(
        &self,
        id: i64,
        representation: Self::Representation,
    ) -> ServiceResult<Self::Representation>;

    /// Retrieve a single resource by id.
    ///
    /// # Returns
    /// * `Ok(Representation)` - The stored resource
    /// * `Err(ServiceError::NotFound)` - If no resource has this id
    /// * `Err(ServiceError::Persistence)` - If storage fails
    async fn find_by_id(&self, id: i64) -> ServiceResult<Self::Representation>;

    /// Retrieve all resources in storage order.
    ///
    /// # Returns
    /// * `Ok(Vec<Representation>)` - All stored resources
    /// * `Err(ServiceError::Persistence)` - If storage fails
    async fn find_all(&self) -> ServiceResult<Vec<Self::Representation>>;

    /// Delete a single resource by id.
    ///
    /// # Returns
    /// * `Ok(())` - If the resource was deleted
    /// * `Err(ServiceError::NotFound)` - If no resource has this id
    /// * `Err(ServiceError::Integrity)` - If a storage constraint rejects the delete
    /// * `Err(ServiceError::Persistence)` - If storage fails
    async fn delete_by_id(&self, id: i64) -> ServiceResult<()>;
}
