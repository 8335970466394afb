//! Get Goals By User Use Case

use std::sync::Arc;

use crate::domain::gateways::GoalRepository;
use crate::domain::models::goal::Goal;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for listing a user's goals
pub struct GetGoalsByUserUseCase {
    goals: Arc<dyn GoalRepository>,
}

impl GetGoalsByUserUseCase {
    #[must_use]
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` when the user has no goals.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &RecordId) -> Result<Vec<Goal>, UseCaseError> {
        let goals = self.goals.find_by_user_id(user_id).await?;

        if goals.is_empty() {
            return Err(UseCaseError::NotFound(format!(
                "Goals for user with ID {user_id} not found! Either that user has no goals, or there is no such user!"
            )));
        }

        Ok(goals)
    }
}
