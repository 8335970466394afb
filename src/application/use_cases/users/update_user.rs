//! Update User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::record_id::RecordId;
use crate::domain::models::user::{UpdateUserData, User};
use crate::shared::errors::UseCaseError;

/// Caller-supplied update data, password still in plaintext
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub google_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Use case for updating a user
pub struct UpdateUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the user doesn't exist.
    /// Returns `UseCaseError::Internal` when password hashing fails.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId, input: UpdateUserInput) -> Result<User, UseCaseError> {
        tracing::info!(user_id = %id, "Updating user");

        let existing = self.users.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %id, "User not found for update");
            UseCaseError::NotFound(format!(
                "Cannot update user with userId={id}. This userId was not found!"
            ))
        })?;

        let password_hash = match input.password {
            Some(password) => Some(
                bcrypt::hash(password, bcrypt::DEFAULT_COST)
                    .map_err(|err| UseCaseError::Internal(format!("Failed to hash password: {err}")))?,
            ),
            None => None,
        };

        let updated = existing.with_updates(UpdateUserData {
            google_id: input.google_id,
            name: input.name,
            email: input.email,
            password_hash,
        });
        self.users.update(&updated).await?;

        Ok(updated)
    }
}
