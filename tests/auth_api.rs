//! Router-level tests for the OAuth login flow and logout

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::util::ServiceExt;

use common::{celebration_body, TestApp};

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn login_route_redirects_to_the_provider() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/auth/google")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert!(response.status().is_redirection());
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(location.starts_with("https://accounts.example.com/"));
}

#[tokio::test]
async fn callback_mints_a_working_token_and_session_cookie() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/auth/google/callback?code=good-code")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("sid="));

    let token = json_body(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    // The minted token passes the gate on a protected route
    let request = Request::builder()
        .method(Method::POST)
        .uri("/celebrations")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(celebration_body().to_string()))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn callback_with_bad_code_is_unauthorized() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/auth/google/callback?code=bad-code")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn callback_without_code_is_unauthorized() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/auth/google/callback")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_revokes_the_token_for_later_requests() {
    let app = TestApp::new();

    // Log in to obtain a token and session cookie
    let request = Request::builder()
        .uri("/auth/google/callback?code=good-code")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    let token = json_body(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    // Token is accepted before logout
    let request = Request::builder()
        .method(Method::POST)
        .uri("/celebrations")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(celebration_body().to_string()))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Log out with the session cookie
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/logout")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["message"], "Successfully logged out");

    // The very same token string is now rejected as revoked
    let request = Request::builder()
        .method(Method::POST)
        .uri("/celebrations")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(celebration_body().to_string()))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_a_cookie_still_succeeds() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/logout")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
