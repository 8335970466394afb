//! Delete Event Use Case

use std::sync::Arc;

use crate::domain::gateways::EventRepository;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting an event
pub struct DeleteEventUseCase {
    events: Arc<dyn EventRepository>,
}

impl DeleteEventUseCase {
    #[must_use]
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the event doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId) -> Result<(), UseCaseError> {
        tracing::info!(event_id = %id, "Deleting event");

        let deleted = self.events.delete(id).await?;

        if !deleted {
            tracing::warn!(event_id = %id, "Event not found for deletion");
            return Err(UseCaseError::NotFound("Event not found".to_string()));
        }

        Ok(())
    }
}
