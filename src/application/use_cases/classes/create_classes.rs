//! Create Classes Use Case (bulk)
//!
//! Inserts a whole schedule in one call. All-or-nothing: the repository runs
//! the inserts in a single transaction.

use std::sync::Arc;

use crate::domain::gateways::ClassRepository;
use crate::domain::models::class::{Class, CreateClassData};
use crate::shared::errors::UseCaseError;

/// Use case for creating several classes at once
pub struct CreateClassesUseCase {
    classes: Arc<dyn ClassRepository>,
}

impl CreateClassesUseCase {
    #[must_use]
    pub fn new(classes: Arc<dyn ClassRepository>) -> Self {
        Self { classes }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: Vec<CreateClassData>) -> Result<Vec<Class>, UseCaseError> {
        tracing::info!(count = data.len(), "Creating classes in bulk");

        let classes: Vec<Class> = data.into_iter().map(Class::new).collect();
        self.classes.create_many(&classes).await?;

        Ok(classes)
    }
}
