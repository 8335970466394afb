//! Delete User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a user
pub struct DeleteUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the user doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId) -> Result<(), UseCaseError> {
        tracing::info!(user_id = %id, "Deleting user");

        let deleted = self.users.delete(id).await?;

        if !deleted {
            tracing::warn!(user_id = %id, "User not found for deletion");
            return Err(UseCaseError::NotFound(format!(
                "Cannot delete user with userId={id}. This userId was not found!"
            )));
        }

        Ok(())
    }
}
