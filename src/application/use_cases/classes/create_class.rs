//! Create Class Use Case

use std::sync::Arc;

use crate::domain::gateways::ClassRepository;
use crate::domain::models::class::{Class, CreateClassData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new class
pub struct CreateClassUseCase {
    classes: Arc<dyn ClassRepository>,
}

impl CreateClassUseCase {
    #[must_use]
    pub fn new(classes: Arc<dyn ClassRepository>) -> Self {
        Self { classes }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateClassData) -> Result<Class, UseCaseError> {
        tracing::info!(user_id = %data.user_id, "Creating class");

        let class = Class::new(data);
        self.classes.create(&class).await?;

        tracing::info!(class_id = %class.id(), "Class created");
        Ok(class)
    }
}
