//! Logout Use Case
//!
//! Revokes the session's token and destroys the session record. The token
//! lands on the revocation list before the session goes away, so a crash in
//! between can only leave a revoked token behind, never a live one.

use std::sync::Arc;

use crate::domain::gateways::{RevokedTokenRepository, SessionRepository};
use crate::shared::errors::UseCaseError;

/// Use case ending a session at the user's request
pub struct LogoutUseCase {
    sessions: Arc<dyn SessionRepository>,
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
}

impl LogoutUseCase {
    #[must_use]
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        revoked_tokens: Arc<dyn RevokedTokenRepository>,
    ) -> Self {
        Self {
            sessions,
            revoked_tokens,
        }
    }

    /// Execute the use case. Logging out without a live session succeeds: the
    /// caller ends up in the logged-out state either way.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Internal` when the token cannot be blacklisted
    /// or the session cannot be destroyed.
    pub async fn execute(&self, session_id: Option<&str>) -> Result<(), UseCaseError> {
        let Some(session_id) = session_id else {
            return Ok(());
        };

        let session = self
            .sessions
            .find_by_id(session_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to look up session");
                UseCaseError::Internal("Error looking up session".to_string())
            })?;

        let Some(session) = session else {
            return Ok(());
        };

        self.revoked_tokens
            .insert(session.token())
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to blacklist token");
                UseCaseError::Internal("Error blacklisting token".to_string())
            })?;
        tracing::info!(session_id = %session.id(), "Token blacklisted");

        self.sessions
            .delete_by_id(session_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to destroy session");
                UseCaseError::Internal("Error destroying session".to_string())
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::Session;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSessionRepository {
        session: Mutex<Option<Session>>,
        deleted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn create(&self, _session: &Session) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<Session>, RepositoryError> {
            Ok(self.session.lock().unwrap().clone())
        }

        async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError> {
            self.deleted.lock().unwrap().push(id.to_string());
            Ok(true)
        }

        async fn delete_by_token(&self, _token: &str) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    struct MockRevokedTokenRepository {
        inserted: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl RevokedTokenRepository for MockRevokedTokenRepository {
        async fn insert(&self, token: &str) -> Result<(), RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Mapping("store down".to_string()));
            }
            self.inserted.lock().unwrap().push(token.to_string());
            Ok(())
        }

        async fn contains(&self, _token: &str) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn logout_blacklists_the_token_and_destroys_the_session() {
        let session = Session::new("the-token".to_string());
        let session_id = session.id().to_string();
        let sessions = Arc::new(MockSessionRepository {
            session: Mutex::new(Some(session)),
            deleted: Mutex::new(vec![]),
        });
        let revoked = Arc::new(MockRevokedTokenRepository {
            inserted: Mutex::new(vec![]),
            fail: false,
        });

        let use_case = LogoutUseCase::new(sessions.clone(), revoked.clone());
        use_case.execute(Some(&session_id)).await.unwrap();

        assert_eq!(*revoked.inserted.lock().unwrap(), vec!["the-token"]);
        assert_eq!(*sessions.deleted.lock().unwrap(), vec![session_id]);
    }

    #[tokio::test]
    async fn logout_without_a_session_cookie_still_succeeds() {
        let sessions = Arc::new(MockSessionRepository {
            session: Mutex::new(None),
            deleted: Mutex::new(vec![]),
        });
        let revoked = Arc::new(MockRevokedTokenRepository {
            inserted: Mutex::new(vec![]),
            fail: false,
        });

        let use_case = LogoutUseCase::new(sessions, revoked.clone());
        assert!(use_case.execute(None).await.is_ok());
        assert!(revoked.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blacklist_failure_surfaces_and_keeps_the_session() {
        let session = Session::new("the-token".to_string());
        let session_id = session.id().to_string();
        let sessions = Arc::new(MockSessionRepository {
            session: Mutex::new(Some(session)),
            deleted: Mutex::new(vec![]),
        });
        let revoked = Arc::new(MockRevokedTokenRepository {
            inserted: Mutex::new(vec![]),
            fail: true,
        });

        let use_case = LogoutUseCase::new(sessions.clone(), revoked);
        let result = use_case.execute(Some(&session_id)).await;

        assert!(matches!(result, Err(UseCaseError::Internal(_))));
        assert!(sessions.deleted.lock().unwrap().is_empty());
    }
}
