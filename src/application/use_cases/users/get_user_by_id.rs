//! Get User By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::record_id::RecordId;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for getting a user by ID
pub struct GetUserByIdUseCase {
    users: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
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
    pub async fn execute(&self, id: &RecordId) -> Result<User, UseCaseError> {
        self.users.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %id, "User not found");
            UseCaseError::NotFound(format!("User with userId {id} not found!"))
        })
    }
}
