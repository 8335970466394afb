//! Get Celebrations By User Use Case

use std::sync::Arc;

use crate::domain::gateways::CelebrationRepository;
use crate::domain::models::celebration::Celebration;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for listing a user's celebrations
pub struct GetCelebrationsByUserUseCase {
    celebrations: Arc<dyn CelebrationRepository>,
}

impl GetCelebrationsByUserUseCase {
    #[must_use]
    pub fn new(celebrations: Arc<dyn CelebrationRepository>) -> Self {
        Self { celebrations }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` when the user has no celebrations.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &RecordId) -> Result<Vec<Celebration>, UseCaseError> {
        let celebrations = self.celebrations.find_by_user_id(user_id).await?;

        if celebrations.is_empty() {
            return Err(UseCaseError::NotFound(
                "No celebrations found! There are either no celebrations yet, or there was an error retrieving them.".to_string(),
            ));
        }

        Ok(celebrations)
    }
}
