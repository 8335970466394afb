//! Event Repository Gateway

use async_trait::async_trait;

use crate::domain::models::event::Event;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Event persistence operations
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find an event by its ID
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Event>, RepositoryError>;

    /// Find all events
    async fn find_all(&self) -> Result<Vec<Event>, RepositoryError>;

    /// Create a new event
    async fn create(&self, event: &Event) -> Result<(), RepositoryError>;

    /// Update an existing event; false when the id does not exist
    async fn update(&self, event: &Event) -> Result<bool, RepositoryError>;

    /// Delete an event; false when the id does not exist
    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError>;
}
