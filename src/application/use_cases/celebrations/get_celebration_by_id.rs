//! Get Celebration By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::CelebrationRepository;
use crate::domain::models::celebration::Celebration;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for getting a celebration by ID
pub struct GetCelebrationByIdUseCase {
    celebrations: Arc<dyn CelebrationRepository>,
}

impl GetCelebrationByIdUseCase {
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
    pub async fn execute(&self, id: &RecordId) -> Result<Celebration, UseCaseError> {
        self.celebrations.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(celebration_id = %id, "Celebration not found");
            UseCaseError::NotFound(format!("Celebration with celebrationId {id} not found!"))
        })
    }
}
