//! Google OAuth Client
//!
//! Implements the OAuthProvider gateway against Google's OAuth 2.0 endpoints:
//! exchanges the callback code for an access token, then fetches the user's
//! profile from the userinfo endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::gateways::OAuthProvider;
use crate::domain::models::auth::OAuthProfile;
use crate::shared::errors::OAuthError;

use super::config::GoogleConfig;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    id: String,
    name: Option<String>,
    email: Option<String>,
}

/// reqwest-backed client for Google's OAuth endpoints
pub struct GoogleOAuthClient {
    http: reqwest::Client,
    config: GoogleConfig,
}

impl GoogleOAuthClient {
    #[must_use]
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    fn authorization_url(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_url)
            .append_pair("response_type", "code")
            .append_pair("scope", "profile email")
            .finish();
        format!("{}?{}", self.config.auth_url, query)
    }

    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, OAuthError> {
        let response = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("code", code),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OAuthError::Provider(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }
        let token: TokenResponse = response.json().await?;

        let response = self
            .http
            .get(&self.config.userinfo_url)
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OAuthError::Provider(format!(
                "userinfo endpoint returned {}",
                response.status()
            )));
        }
        let info: UserInfo = response.json().await?;

        Ok(OAuthProfile {
            google_id: info.id,
            name: info.name.unwrap_or_default(),
            // Google omits the email when the user declined the scope
            email: info
                .email
                .unwrap_or_else(|| "no-email@example.com".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> GoogleConfig {
        GoogleConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            redirect_url: "http://localhost:3000/auth/google/callback".to_string(),
            auth_url: format!("{}/o/oauth2/v2/auth", server.uri()),
            token_url: format!("{}/token", server.uri()),
            userinfo_url: format!("{}/userinfo", server.uri()),
        }
    }

    #[tokio::test]
    async fn fetches_profile_from_code() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("code=the-code"))
            .and(body_string_contains("grant_type=authorization_code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "ya29.token",
                "token_type": "Bearer",
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "108234567890123456789",
                "name": "Test User",
                "email": "test@example.com",
            })))
            .mount(&server)
            .await;

        let client = GoogleOAuthClient::new(config_for(&server));
        let profile = client.fetch_profile("the-code").await.unwrap();

        assert_eq!(profile.google_id, "108234567890123456789");
        assert_eq!(profile.name, "Test User");
        assert_eq!(profile.email, "test@example.com");
    }

    #[tokio::test]
    async fn missing_email_falls_back_to_placeholder() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "ya29.token",
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "108234567890123456789",
                "name": "Test User",
            })))
            .mount(&server)
            .await;

        let client = GoogleOAuthClient::new(config_for(&server));
        let profile = client.fetch_profile("the-code").await.unwrap();

        assert_eq!(profile.email, "no-email@example.com");
    }

    #[tokio::test]
    async fn rejected_code_surfaces_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
            })))
            .mount(&server)
            .await;

        let client = GoogleOAuthClient::new(config_for(&server));
        let result = client.fetch_profile("bad-code").await;

        assert!(matches!(result, Err(OAuthError::Provider(_))));
    }

    #[test]
    fn authorization_url_carries_client_and_redirect() {
        let config = GoogleConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            redirect_url: "http://localhost:3000/auth/google/callback".to_string(),
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
        };
        let client = GoogleOAuthClient::new(config);

        let uri = client.authorization_url();
        assert!(uri.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(uri.contains("client_id=client-id"));
        assert!(uri.contains("response_type=code"));
        assert!(uri.contains("scope=profile+email"));
    }
}
