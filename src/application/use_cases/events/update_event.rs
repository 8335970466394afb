//! Update Event Use Case

use std::sync::Arc;

use crate::domain::gateways::EventRepository;
use crate::domain::models::event::{Event, UpdateEventData};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for updating an event
pub struct UpdateEventUseCase {
    events: Arc<dyn EventRepository>,
}

impl UpdateEventUseCase {
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
    pub async fn execute(&self, id: &RecordId, data: UpdateEventData) -> Result<Event, UseCaseError> {
        tracing::info!(event_id = %id, "Updating event");

        let existing = self.events.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(event_id = %id, "Event not found for update");
            UseCaseError::NotFound("Event not found".to_string())
        })?;

        let updated = existing.with_updates(data);
        self.events.update(&updated).await?;

        Ok(updated)
    }
}
