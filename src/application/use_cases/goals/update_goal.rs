//! Update Goal Use Case

use std::sync::Arc;

use crate::domain::gateways::GoalRepository;
use crate::domain::models::goal::{Goal, UpdateGoalData};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for updating a goal
pub struct UpdateGoalUseCase {
    goals: Arc<dyn GoalRepository>,
}

impl UpdateGoalUseCase {
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
    pub async fn execute(&self, id: &RecordId, data: UpdateGoalData) -> Result<Goal, UseCaseError> {
        tracing::info!(goal_id = %id, "Updating goal");

        let existing = self.goals.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(goal_id = %id, "Goal not found for update");
            UseCaseError::NotFound(format!("Goal not found with ID: {id}"))
        })?;

        let updated = existing.with_updates(data);
        self.goals.update(&updated).await?;

        Ok(updated)
    }
}
