//! Get Class By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::ClassRepository;
use crate::domain::models::class::Class;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for getting a class by ID
pub struct GetClassByIdUseCase {
    classes: Arc<dyn ClassRepository>,
}

impl GetClassByIdUseCase {
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
    pub async fn execute(&self, id: &RecordId) -> Result<Class, UseCaseError> {
        self.classes.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(class_id = %id, "Class not found");
            UseCaseError::NotFound(format!("Class with class ID {id} not found!"))
        })
    }
}
