//! Complete Login Use Case
//!
//! Finishes the OAuth redirect flow: exchanges the callback code for the
//! provider profile, mints a bearer token from it, and opens a server-side
//! session that remembers the token for logout.

use std::sync::Arc;

use crate::domain::gateways::{OAuthProvider, SessionRepository};
use crate::domain::models::auth::Session;
use crate::infrastructure::driven_adapters::jwt::JwtService;
use crate::shared::errors::UseCaseError;

/// A freshly minted token and the session id that travels in the cookie
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub session_id: String,
}

/// Use case completing a Google OAuth login
pub struct CompleteLoginUseCase {
    oauth: Arc<dyn OAuthProvider>,
    sessions: Arc<dyn SessionRepository>,
    tokens: Arc<JwtService>,
}

impl CompleteLoginUseCase {
    #[must_use]
    pub fn new(
        oauth: Arc<dyn OAuthProvider>,
        sessions: Arc<dyn SessionRepository>,
        tokens: Arc<JwtService>,
    ) -> Self {
        Self {
            oauth,
            sessions,
            tokens,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::OAuth` when the provider rejects the code and
    /// `UseCaseError::Repository` when the session cannot be stored.
    pub async fn execute(&self, code: &str) -> Result<LoginOutcome, UseCaseError> {
        let profile = self.oauth.fetch_profile(code).await?;
        tracing::info!(google_id = %profile.google_id, "OAuth login completed");

        let token = self
            .tokens
            .mint(&profile)
            .map_err(|err| UseCaseError::Internal(format!("Failed to mint token: {err}")))?;

        let session = Session::new(token.clone());
        self.sessions.create(&session).await?;

        Ok(LoginOutcome {
            token,
            session_id: session.id().to_string(),
        })
    }
}
