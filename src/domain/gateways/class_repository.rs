//! Class Repository Gateway

use async_trait::async_trait;

use crate::domain::models::class::Class;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Class persistence operations
#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// Find a class by its ID
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Class>, RepositoryError>;

    /// Find all classes owned by a user
    async fn find_by_user_id(&self, user_id: &RecordId) -> Result<Vec<Class>, RepositoryError>;

    /// Create a new class
    async fn create(&self, class: &Class) -> Result<(), RepositoryError>;

    /// Create several classes in one call
    async fn create_many(&self, classes: &[Class]) -> Result<(), RepositoryError>;

    /// Update an existing class; false when the id does not exist
    async fn update(&self, class: &Class) -> Result<bool, RepositoryError>;

    /// Delete a class; false when the id does not exist
    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError>;
}
