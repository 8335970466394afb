//! Celebration Repository Gateway

use async_trait::async_trait;

use crate::domain::models::celebration::Celebration;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Celebration persistence operations
#[async_trait]
pub trait CelebrationRepository: Send + Sync {
    /// Find a celebration by its ID
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Celebration>, RepositoryError>;

    /// Find all celebrations owned by a user
    async fn find_by_user_id(&self, user_id: &RecordId)
        -> Result<Vec<Celebration>, RepositoryError>;

    /// Create a new celebration
    async fn create(&self, celebration: &Celebration) -> Result<(), RepositoryError>;

    /// Update an existing celebration; false when the id does not exist
    async fn update(&self, celebration: &Celebration) -> Result<bool, RepositoryError>;

    /// Delete a celebration; false when the id does not exist
    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError>;
}
