//! Create Goal Use Case

use std::sync::Arc;

use crate::domain::gateways::GoalRepository;
use crate::domain::models::goal::{CreateGoalData, Goal};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new goal
pub struct CreateGoalUseCase {
    goals: Arc<dyn GoalRepository>,
}

impl CreateGoalUseCase {
    #[must_use]
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateGoalData) -> Result<Goal, UseCaseError> {
        tracing::info!(name = %data.name, "Creating goal");

        let goal = Goal::new(data);
        self.goals.create(&goal).await?;

        tracing::info!(goal_id = %goal.id(), "Goal created");
        Ok(goal)
    }
}
