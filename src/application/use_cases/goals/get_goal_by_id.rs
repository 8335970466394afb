//! Get Goal By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::GoalRepository;
use crate::domain::models::goal::Goal;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for getting a goal by ID
pub struct GetGoalByIdUseCase {
    goals: Arc<dyn GoalRepository>,
}

impl GetGoalByIdUseCase {
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
    pub async fn execute(&self, id: &RecordId) -> Result<Goal, UseCaseError> {
        self.goals.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(goal_id = %id, "Goal not found");
            UseCaseError::NotFound(format!("Goal not found with ID: {id}"))
        })
    }
}
