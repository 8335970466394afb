//! Authentication Middleware
//!
//! The HTTP face of the authentication gate. The `JwtAuth` extractor asks
//! the gate for a pure decision; on `Rejected(Expired)` it additionally runs
//! the session teardown step before responding, keeping the decision itself
//! free of side effects.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        header::{AUTHORIZATION, COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};

use crate::application::use_cases::auth::{AuthorizeRequestUseCase, EndExpiredSessionUseCase};
use crate::domain::models::auth::{AuthDecision, AuthenticatedUser, RejectionReason};
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Name of the session cookie set at login
pub const SESSION_COOKIE: &str = "sid";

/// Build the Set-Cookie value that opens a session
#[must_use]
pub fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly")
}

/// Build the Set-Cookie value that clears the session cookie
#[must_use]
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}

/// Extract the session id from the request's Cookie header, if any
#[must_use]
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, session_id)| session_id.to_string())
}

/// Authenticated identity extracted from a verified bearer token
pub struct JwtAuth(pub AuthenticatedUser);

/// Response for requests the gate turned away
pub struct AuthRejection {
    status: StatusCode,
    message: String,
    clear_cookie: bool,
}

impl AuthRejection {
    fn internal(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
            clear_cookie: false,
        }
    }
}

impl From<RejectionReason> for AuthRejection {
    fn from(reason: RejectionReason) -> Self {
        match reason {
            RejectionReason::MissingCredential => Self {
                status: StatusCode::FORBIDDEN,
                message: "No token provided".to_string(),
                clear_cookie: false,
            },
            RejectionReason::Revoked => Self {
                status: StatusCode::UNAUTHORIZED,
                message:
                    "You are NOT AUTHORIZED because the token is no longer valid due to logging out"
                        .to_string(),
                clear_cookie: false,
            },
            RejectionReason::Invalid => Self {
                status: StatusCode::FORBIDDEN,
                message: "Invalid token".to_string(),
                clear_cookie: false,
            },
            RejectionReason::Expired => Self {
                status: StatusCode::FORBIDDEN,
                message: "Token expired".to_string(),
                clear_cookie: true,
            },
            RejectionReason::Internal => Self::internal("Error checking blacklist"),
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            Json(serde_json::json!({ "message": self.message })),
        )
            .into_response();

        if self.clear_cookie {
            if let Ok(value) = HeaderValue::from_str(&clear_session_cookie()) {
                response.headers_mut().insert(SET_COOKIE, value);
            }
        }

        response
    }
}

impl<S> axum::extract::FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let gate = parts
                .extensions
                .get::<Arc<AuthorizeRequestUseCase>>()
                .cloned()
                .ok_or_else(|| AuthRejection::internal("Authentication gate not available"))?;
            let cleanup = parts
                .extensions
                .get::<Arc<EndExpiredSessionUseCase>>()
                .cloned()
                .ok_or_else(|| AuthRejection::internal("Authentication gate not available"))?;

            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|header| header.to_str().ok())
                .and_then(|header| header.strip_prefix("Bearer "));

            match gate.execute(token).await {
                AuthDecision::Admitted(user) => Ok(JwtAuth(user)),
                AuthDecision::Rejected(reason) => {
                    // Teardown is a separate step consuming the expired
                    // rejection; its own failure outranks the 403.
                    if reason == RejectionReason::Expired {
                        if let Some(token) = token {
                            if cleanup.execute(token).await.is_err() {
                                return Err(AuthRejection::internal("Error clearing session"));
                            }
                        }
                    }
                    Err(AuthRejection::from(reason))
                }
            }
        })
    }
}

/// Middleware layer that injects the gate's use cases into request
/// extensions so the `JwtAuth` extractor can reach them.
pub async fn add_auth_extensions(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.auth.authorize.clone());
    request
        .extensions_mut()
        .insert(state.auth.end_expired_session.clone());
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_is_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; sid=55532c284e8d64fbf0ea178f; lang=en"),
        );
        assert_eq!(
            session_id_from_headers(&headers).as_deref(),
            Some("55532c284e8d64fbf0ea178f")
        );
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert_eq!(clear_session_cookie(), "sid=; Path=/; HttpOnly; Max-Age=0");
    }
}
