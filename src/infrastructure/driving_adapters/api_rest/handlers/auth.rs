//! Auth Handlers
//!
//! The Google OAuth redirect flow and logout.

use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::infrastructure::driving_adapters::api_rest::middleware::auth::{
    clear_session_cookie, session_cookie, session_id_from_headers,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for auth endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/google", get(google_login))
        .route("/auth/google/callback", get(google_callback))
        .route("/auth/logout", post(logout))
}

/// GET /auth/google - Redirect to the provider's consent page
#[axum::debug_handler]
async fn google_login(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.auth.oauth.authorization_url())
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

/// GET /auth/google/callback - Complete the login
///
/// Exchanges the provider's code for a profile, mints a bearer token, opens
/// a session, and hands the token back to the client.
///
/// # Responses
///
/// * 200 OK - `{"token": ...}` plus the `sid` session cookie
/// * 401 Unauthorized - The provider rejected the code
#[axum::debug_handler]
async fn google_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(code) = query.code else {
        return Err(ApiError::UseCase(UseCaseError::Unauthorized(
            "Authentication failed".to_string(),
        )));
    };

    let outcome = state.auth.complete_login.execute(&code).await?;

    Ok((
        [(SET_COOKIE, session_cookie(&outcome.session_id))],
        Json(serde_json::json!({ "token": outcome.token })),
    ))
}

/// POST /auth/logout - End the session
///
/// Blacklists the session's token so it stops working before its natural
/// expiry, destroys the session record, and clears the cookie.
///
/// # Responses
///
/// * 200 OK - Logged out (with or without a live session)
/// * 500 Internal Server Error - The blacklist or session store failed
#[axum::debug_handler]
async fn logout(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = session_id_from_headers(&headers);
    state.auth.logout.execute(session_id.as_deref()).await?;

    Ok((
        [(SET_COOKIE, clear_session_cookie())],
        Json(serde_json::json!({ "message": "Successfully logged out" })),
    ))
}
