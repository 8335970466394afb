//! Goal Repository Gateway

use async_trait::async_trait;

use crate::domain::models::goal::Goal;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Goal persistence operations
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Find a goal by its ID
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Goal>, RepositoryError>;

    /// Find all goals owned by a user
    async fn find_by_user_id(&self, user_id: &RecordId) -> Result<Vec<Goal>, RepositoryError>;

    /// Create a new goal
    async fn create(&self, goal: &Goal) -> Result<(), RepositoryError>;

    /// Update an existing goal; false when the id does not exist
    async fn update(&self, goal: &Goal) -> Result<bool, RepositoryError>;

    /// Delete a goal; false when the id does not exist
    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError>;
}
