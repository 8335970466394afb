//! Delete Goal Use Case

use std::sync::Arc;

use crate::domain::gateways::GoalRepository;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a goal
pub struct DeleteGoalUseCase {
    goals: Arc<dyn GoalRepository>,
}

impl DeleteGoalUseCase {
    #[must_use]
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the goal doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId) -> Result<(), UseCaseError> {
        tracing::info!(goal_id = %id, "Deleting goal");

        let deleted = self.goals.delete(id).await?;

        if !deleted {
            tracing::warn!(goal_id = %id, "Goal not found for deletion");
            return Err(UseCaseError::NotFound(format!("Goal not found with ID: {id}")));
        }

        Ok(())
    }
}
