//! Create Celebration Use Case

use std::sync::Arc;

use crate::domain::gateways::CelebrationRepository;
use crate::domain::models::celebration::{Celebration, CreateCelebrationData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new celebration
pub struct CreateCelebrationUseCase {
    celebrations: Arc<dyn CelebrationRepository>,
}

impl CreateCelebrationUseCase {
    #[must_use]
    pub fn new(celebrations: Arc<dyn CelebrationRepository>) -> Self {
        Self { celebrations }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateCelebrationData) -> Result<Celebration, UseCaseError> {
        tracing::info!(person = %data.person, occasion = %data.occasion, "Creating celebration");

        let celebration = Celebration::new(data);
        self.celebrations.create(&celebration).await?;

        tracing::info!(celebration_id = %celebration.id(), "Celebration created");
        Ok(celebration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::celebration::Visibility;
    use crate::domain::models::record_id::RecordId;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockCelebrationRepository {
        create_result: Mutex<Option<Result<(), RepositoryError>>>,
    }

    #[async_trait]
    impl CelebrationRepository for MockCelebrationRepository {
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
            self.create_result.lock().unwrap().take().unwrap_or(Ok(()))
        }

        async fn update(&self, _celebration: &Celebration) -> Result<bool, RepositoryError> {
            Ok(false)
        }

        async fn delete(&self, _id: &RecordId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    fn create_data() -> CreateCelebrationData {
        CreateCelebrationData {
            person: "Grandma".to_string(),
            occasion: "80th birthday".to_string(),
            plan: "Surprise dinner".to_string(),
            user_id: RecordId::new(),
            date: "Dec 12, 2026".to_string(),
            location: None,
            others_involved: vec![],
            visibility: None,
        }
    }

    #[tokio::test]
    async fn creates_celebration_with_public_default_visibility() {
        let repo = Arc::new(MockCelebrationRepository {
            create_result: Mutex::new(None),
        });

        let use_case = CreateCelebrationUseCase::new(repo);
        let celebration = use_case.execute(create_data()).await.unwrap();

        assert_eq!(celebration.person(), "Grandma");
        assert_eq!(celebration.visibility(), Visibility::Public);
    }

    #[tokio::test]
    async fn database_failure_surfaces_as_repository_error() {
        let repo = Arc::new(MockCelebrationRepository {
            create_result: Mutex::new(Some(Err(RepositoryError::Mapping(
                "boom".to_string(),
            )))),
        });

        let use_case = CreateCelebrationUseCase::new(repo);
        let result = use_case.execute(create_data()).await;

        assert!(matches!(result, Err(UseCaseError::Repository(_))));
    }
}
