//! Update Celebration Use Case

use std::sync::Arc;

use crate::domain::gateways::CelebrationRepository;
use crate::domain::models::celebration::{Celebration, UpdateCelebrationData};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for updating a celebration
pub struct UpdateCelebrationUseCase {
    celebrations: Arc<dyn CelebrationRepository>,
}

impl UpdateCelebrationUseCase {
    #[must_use]
    pub fn new(celebrations: Arc<dyn CelebrationRepository>) -> Self {
        Self { celebrations }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the celebration doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: &RecordId,
        data: UpdateCelebrationData,
    ) -> Result<Celebration, UseCaseError> {
        tracing::info!(celebration_id = %id, "Updating celebration");

        let existing = self.celebrations.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(celebration_id = %id, "Celebration not found for update");
            UseCaseError::NotFound(format!("Celebration with celebrationId {id} not found!"))
        })?;

        let updated = existing.with_updates(data);
        self.celebrations.update(&updated).await?;

        Ok(updated)
    }
}
