//! Create User Use Case
//!
//! Hashes the password (when one is supplied) before anything touches the
//! repository; plaintext never reaches the domain or the database.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, User};
use crate::shared::errors::UseCaseError;

/// Caller-supplied user data, password still in plaintext
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub google_id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

/// Use case for creating a new user
pub struct CreateUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Internal` when password hashing fails.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, UseCaseError> {
        tracing::info!(email = %input.email, "Creating user");

        let password_hash = match input.password {
            Some(password) => Some(
                bcrypt::hash(password, bcrypt::DEFAULT_COST)
                    .map_err(|err| UseCaseError::Internal(format!("Failed to hash password: {err}")))?,
            ),
            None => None,
        };

        let user = User::new(CreateUserData {
            google_id: input.google_id,
            name: input.name,
            email: input.email,
            password_hash,
        });
        self.users.create(&user).await?;

        tracing::info!(user_id = %user.id(), "User created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::record_id::RecordId;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockUserRepository {
        created: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, _id: &RecordId) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(vec![])
        }

        async fn create(&self, user: &User) -> Result<(), RepositoryError> {
            self.created.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn update(&self, _user: &User) -> Result<bool, RepositoryError> {
            Ok(false)
        }

        async fn delete(&self, _id: &RecordId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn stores_a_bcrypt_hash_never_the_plaintext() {
        let repo = Arc::new(MockUserRepository {
            created: Mutex::new(vec![]),
        });

        let use_case = CreateUserUseCase::new(repo.clone());
        let user = use_case
            .execute(CreateUserInput {
                google_id: None,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: Some("Str0ng!pw".to_string()),
            })
            .await
            .unwrap();

        let hash = user.password_hash().unwrap().to_string();
        assert_ne!(hash, "Str0ng!pw");
        assert!(bcrypt::verify("Str0ng!pw", &hash).unwrap());
        assert_eq!(repo.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn password_is_optional_for_oauth_only_accounts() {
        let repo = Arc::new(MockUserRepository {
            created: Mutex::new(vec![]),
        });

        let use_case = CreateUserUseCase::new(repo);
        let user = use_case
            .execute(CreateUserInput {
                google_id: Some("108234567890123456789".to_string()),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: None,
            })
            .await
            .unwrap();

        assert!(user.password_hash().is_none());
    }
}
