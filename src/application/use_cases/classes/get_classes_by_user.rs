//! Get Classes By User Use Case

use std::sync::Arc;

use crate::domain::gateways::ClassRepository;
use crate::domain::models::class::Class;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for listing a user's classes
pub struct GetClassesByUserUseCase {
    classes: Arc<dyn ClassRepository>,
}

impl GetClassesByUserUseCase {
    #[must_use]
    pub fn new(classes: Arc<dyn ClassRepository>) -> Self {
        Self { classes }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` when the user has no classes.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: &RecordId) -> Result<Vec<Class>, UseCaseError> {
        let classes = self.classes.find_by_user_id(user_id).await?;

        if classes.is_empty() {
            return Err(UseCaseError::NotFound(format!(
                "Classes for user with ID {user_id} not found! Either that user has no classes, or there is no such user!"
            )));
        }

        Ok(classes)
    }
}
