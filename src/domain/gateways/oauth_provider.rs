//! OAuth Provider Gateway
//!
//! The external identity provider completing the redirect-based login flow.
//! This crate consumes the provider's profile; it does not implement the
//! handshake itself.

use async_trait::async_trait;

use crate::domain::models::auth::OAuthProfile;
use crate::shared::errors::OAuthError;

/// Gateway trait for the external OAuth identity provider
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// The consent-page URL the login route redirects to
    fn authorization_url(&self) -> String;

    /// Exchange the callback code for the user's profile
    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, OAuthError>;
}
