//! Delete Celebration Use Case

use std::sync::Arc;

use crate::domain::gateways::CelebrationRepository;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a celebration
pub struct DeleteCelebrationUseCase {
    celebrations: Arc<dyn CelebrationRepository>,
}

impl DeleteCelebrationUseCase {
    #[must_use]
    pub fn new(celebrations: Arc<dyn CelebrationRepository>) -> Self {
        Self { celebrations }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the celebration doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &RecordId) -> Result<(), UseCaseError> {
        tracing::info!(celebration_id = %id, "Deleting celebration");

        let deleted = self.celebrations.delete(id).await?;

        if !deleted {
            tracing::warn!(celebration_id = %id, "Celebration not found for deletion");
            return Err(UseCaseError::NotFound(format!(
                "Cannot delete celebration with celebrationId={id}. This celebrationId was not found!"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::celebration::Celebration;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockCelebrationRepository {
        delete_result: Mutex<Option<Result<bool, RepositoryError>>>,
    }

    #[async_trait]
    impl crate::domain::gateways::CelebrationRepository for MockCelebrationRepository {
        async fn find_by_id(
            &self,
            _id: &RecordId,
        ) -> Result<Option<Celebration>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_user_id(
            &self,
            _user_id: &RecordId,
        ) -> Result<Vec<Celebration>, RepositoryError> {
            Ok(vec![])
        }

        async fn create(&self, _celebration: &Celebration) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn update(&self, _celebration: &Celebration) -> Result<bool, RepositoryError> {
            Ok(false)
        }

        async fn delete(&self, _id: &RecordId) -> Result<bool, RepositoryError> {
            self.delete_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(false))
        }
    }

    #[tokio::test]
    async fn deletes_celebration_when_found() {
        let repo = Arc::new(MockCelebrationRepository {
            delete_result: Mutex::new(Some(Ok(true))),
        });

        let use_case = DeleteCelebrationUseCase::new(repo);
        assert!(use_case.execute(&RecordId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn missing_celebration_yields_the_exact_not_found_message() {
        let repo = Arc::new(MockCelebrationRepository {
            delete_result: Mutex::new(Some(Ok(false))),
        });

        let id = RecordId::new();
        let use_case = DeleteCelebrationUseCase::new(repo);
        let err = use_case.execute(&id).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Cannot delete celebration with celebrationId={id}. This celebrationId was not found!")
        );
    }
}
