//! Get All Events Use Case

use std::sync::Arc;

use crate::domain::gateways::EventRepository;
use crate::domain::models::event::Event;
use crate::shared::errors::UseCaseError;

/// Use case for listing all events
pub struct GetAllEventsUseCase {
    events: Arc<dyn EventRepository>,
}

impl GetAllEventsUseCase {
    #[must_use]
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` when no events exist yet.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Event>, UseCaseError> {
        let events = self.events.find_all().await?;

        if events.is_empty() {
            return Err(UseCaseError::NotFound("No events found".to_string()));
        }

        Ok(events)
    }
}
