//! Delete Class Use Case

use std::sync::Arc;

use crate::domain::gateways::ClassRepository;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a class
pub struct DeleteClassUseCase {
    classes: Arc<dyn ClassRepository>,
}

impl DeleteClassUseCase {
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
    pub async fn execute(&self, id: &RecordId) -> Result<(), UseCaseError> {
        tracing::info!(class_id = %id, "Deleting class");

        let deleted = self.classes.delete(id).await?;

        if !deleted {
            tracing::warn!(class_id = %id, "Class not found for deletion");
            return Err(UseCaseError::NotFound(format!(
                "Cannot delete class with classId={id}. This classId was not found!"
            )));
        }

        Ok(())
    }
}
