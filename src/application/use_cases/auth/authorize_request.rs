//! Authorize Request Use Case
//!
//! The authentication gate. Produces a pure decision: no session state is
//! touched here, so the outcome can be asserted in isolation and the caller
//! decides what teardown (if any) follows a rejection.

use std::sync::Arc;

use crate::domain::gateways::RevokedTokenRepository;
use crate::domain::models::auth::{AuthDecision, RejectionReason};
use crate::infrastructure::driven_adapters::jwt::{JwtService, TokenError};

/// Use case deciding whether a bearer token admits a request
pub struct AuthorizeRequestUseCase {
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
    tokens: Arc<JwtService>,
}

impl AuthorizeRequestUseCase {
    #[must_use]
    pub fn new(revoked_tokens: Arc<dyn RevokedTokenRepository>, tokens: Arc<JwtService>) -> Self {
        Self {
            revoked_tokens,
            tokens,
        }
    }

    /// Decide whether the presented token admits the request.
    ///
    /// The revocation list is consulted before signature verification so a
    /// logged-out token is reported as revoked, not merely invalid. A store
    /// failure rejects the request: the gate fails closed.
    pub async fn execute(&self, bearer_token: Option<&str>) -> AuthDecision {
        let Some(token) = bearer_token else {
            return AuthDecision::Rejected(RejectionReason::MissingCredential);
        };

        match self.revoked_tokens.contains(token).await {
            Err(err) => {
                tracing::error!(error = %err, "Failed to query the revocation list");
                return AuthDecision::Rejected(RejectionReason::Internal);
            }
            Ok(true) => {
                tracing::debug!("Rejecting revoked token");
                return AuthDecision::Rejected(RejectionReason::Revoked);
            }
            Ok(false) => {}
        }

        match self.tokens.verify(token) {
            Ok(claims) => AuthDecision::Admitted(claims.into()),
            Err(TokenError::Expired) => AuthDecision::Rejected(RejectionReason::Expired),
            Err(TokenError::Invalid) => AuthDecision::Rejected(RejectionReason::Invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::OAuthProfile;
    use crate::infrastructure::driven_adapters::config::JwtConfig;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;

    struct MockRevokedTokenRepository {
        contains_result: Result<bool, ()>,
    }

    #[async_trait]
    impl RevokedTokenRepository for MockRevokedTokenRepository {
        async fn insert(&self, _token: &str) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn contains(&self, _token: &str) -> Result<bool, RepositoryError> {
            self.contains_result
                .map_err(|()| RepositoryError::Mapping("store down".to_string()))
        }
    }

    fn jwt_service(expires_in_secs: i64) -> Arc<JwtService> {
        Arc::new(JwtService::new(&JwtConfig {
            secret: "test-jwt-secret-key-for-unit-tests-min-32".to_string(),
            expires_in_secs,
        }))
    }

    fn gate(contains_result: Result<bool, ()>) -> AuthorizeRequestUseCase {
        AuthorizeRequestUseCase::new(
            Arc::new(MockRevokedTokenRepository { contains_result }),
            jwt_service(3600),
        )
    }

    fn mint_token(expires_in_secs: i64) -> String {
        jwt_service(expires_in_secs)
            .mint(&OAuthProfile {
                google_id: "108234567890123456789".to_string(),
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
            })
            .unwrap()
    }

    #[tokio::test]
    async fn valid_token_is_admitted_with_its_claims() {
        let token = mint_token(3600);

        let decision = gate(Ok(false)).execute(Some(&token)).await;

        let AuthDecision::Admitted(user) = decision else {
            panic!("expected admission, got {decision:?}");
        };
        assert_eq!(user.google_id, "108234567890123456789");
        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn missing_token_is_rejected() {
        let decision = gate(Ok(false)).execute(None).await;
        assert_eq!(
            decision,
            AuthDecision::Rejected(RejectionReason::MissingCredential)
        );
    }

    #[tokio::test]
    async fn revoked_token_is_rejected_even_though_it_would_verify() {
        let token = mint_token(3600);

        let decision = gate(Ok(true)).execute(Some(&token)).await;

        assert_eq!(decision, AuthDecision::Rejected(RejectionReason::Revoked));
    }

    #[tokio::test]
    async fn expired_token_is_rejected_as_expired_not_invalid() {
        let token = mint_token(-3600);

        let decision = gate(Ok(false)).execute(Some(&token)).await;

        assert_eq!(decision, AuthDecision::Rejected(RejectionReason::Expired));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected_as_invalid() {
        let decision = gate(Ok(false)).execute(Some("garbage")).await;
        assert_eq!(decision, AuthDecision::Rejected(RejectionReason::Invalid));
    }

    #[tokio::test]
    async fn revocation_store_failure_fails_closed() {
        let token = mint_token(3600);

        let decision = gate(Err(())).execute(Some(&token)).await;

        assert_eq!(decision, AuthDecision::Rejected(RejectionReason::Internal));
    }
}
