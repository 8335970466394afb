//! Update Class Use Case

use std::sync::Arc;

use crate::domain::gateways::ClassRepository;
use crate::domain::models::class::{Class, UpdateClassData};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for updating a class
pub struct UpdateClassUseCase {
    classes: Arc<dyn ClassRepository>,
}

impl UpdateClassUseCase {
    #[must_use]
    pub fn new(classes: Arc<dyn ClassRepository>) -> Self {
        Self { classes }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the class doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId, data: UpdateClassData) -> Result<Class, UseCaseError> {
        tracing::info!(class_id = %id, "Updating class");

        let existing = self.classes.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(class_id = %id, "Class not found for update");
            UseCaseError::NotFound(format!("Class with class ID {id} not found!"))
        })?;

        let updated = existing.with_updates(data);
        self.classes.update(&updated).await?;

        Ok(updated)
    }
}
