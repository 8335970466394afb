//! User Repository Gateway

use async_trait::async_trait;

use crate::domain::models::record_id::RecordId;
use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its ID
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<User>, RepositoryError>;

    /// Find all users, sorted by name ascending
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Create a new user
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;

    /// Update an existing user; false when the id does not exist
    async fn update(&self, user: &User) -> Result<bool, RepositoryError>;

    /// Delete a user; false when the id does not exist
    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError>;
}
