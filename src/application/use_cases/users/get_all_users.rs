//! Get All Users Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for listing all users, sorted by name
pub struct GetAllUsersUseCase {
    users: Arc<dyn UserRepository>,
}

impl GetAllUsersUseCase {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` when no users exist yet.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<User>, UseCaseError> {
        let users = self.users.find_all().await?;

        if users.is_empty() {
            return Err(UseCaseError::NotFound(
                "No users found! There are either no users yet, or there was an error retrieving them.".to_string(),
            ));
        }

        Ok(users)
    }
}
