//! Get Event By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::EventRepository;
use crate::domain::models::event::Event;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for getting an event by ID
pub struct GetEventByIdUseCase {
    events: Arc<dyn EventRepository>,
}

impl GetEventByIdUseCase {
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
    pub async fn execute(&self, id: &RecordId) -> Result<Event, UseCaseError> {
        self.events.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(event_id = %id, "Event not found");
            UseCaseError::NotFound("Event not found".to_string())
        })
    }
}
