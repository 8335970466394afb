//! Create Event Use Case

use std::sync::Arc;

use crate::domain::gateways::EventRepository;
use crate::domain::models::event::{CreateEventData, Event};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new event
pub struct CreateEventUseCase {
    events: Arc<dyn EventRepository>,
}

impl CreateEventUseCase {
    #[must_use]
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateEventData) -> Result<Event, UseCaseError> {
        tracing::info!(name = %data.name, "Creating event");

        let event = Event::new(data);
        self.events.create(&event).await?;

        tracing::info!(event_id = %event.id(), "Event created");
        Ok(event)
    }
}
