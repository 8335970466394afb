//! Router-level tests for celebration endpoints
//!
//! Exercises the full pipeline: authentication gate, validation chain, and
//! handlers, over in-memory repositories.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::util::ServiceExt;

use common::{celebration_body, generate_expired_token, unknown_record_id, TestApp};
use organizer_api::domain::gateways::{RevokedTokenRepository, SessionRepository};

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_celebration(app: &TestApp, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/celebrations")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

// ============================================================================
// POST /celebrations
// ============================================================================

#[tokio::test]
async fn create_celebration_returns_created_record() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &celebration_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["person"], "Grandma");
    assert_eq!(body["user"], unknown_record_id());
    assert_eq!(body["id"].as_str().unwrap().len(), 24);
}

#[tokio::test]
async fn omitted_visibility_defaults_to_public() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &celebration_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["visibility"], "Public");
}

#[tokio::test]
async fn wrong_visibility_is_a_precondition_failure() {
    let app = TestApp::new();

    let mut body = celebration_body();
    body["visibility"] = serde_json::json!("Wrong");

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

    let errors = json_body(response).await["errors"].clone();
    assert_eq!(
        errors[0]["enum"],
        "Visibility must be either \"Private\" or \"Public\""
    );
}

#[tokio::test]
async fn non_array_others_involved_is_a_precondition_failure() {
    let app = TestApp::new();

    let mut body = celebration_body();
    body["othersInvolved"] = serde_json::json!("not-an-array");

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    assert_eq!(
        json_body(response).await["errors"][0]["array"],
        "The field must be an array"
    );
}

#[tokio::test]
async fn missing_fields_are_all_reported_in_declaration_order() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

    let errors = json_body(response).await["errors"].clone();
    let messages: Vec<&str> = errors
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["required"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Person is required",
            "Occasion is required",
            "Plan is required",
            "User is required",
            "Date is required",
        ]
    );
}

// ============================================================================
// Authentication gate
// ============================================================================

#[tokio::test]
async fn request_without_token_is_forbidden() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/celebrations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(celebration_body().to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn revoked_token_is_unauthorized_even_though_it_verifies() {
    let app = TestApp::new();
    app.revoked_tokens.insert(&app.jwt_token).await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &celebration_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("logging out"));
}

#[tokio::test]
async fn expired_token_is_forbidden_and_clears_the_session_cookie() {
    let app = TestApp::new();
    let expired = generate_expired_token();
    app.seed_session(&expired).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/celebrations")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {expired}"))
        .body(Body::from(celebration_body().to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));

    // the session tied to the expired token is gone
    assert!(app
        .sessions
        .delete_by_token(&expired)
        .await
        .map(|removed| !removed)
        .unwrap());
}

#[tokio::test]
async fn garbage_token_is_forbidden() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/celebrations")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer garbage")
        .body(Body::from(celebration_body().to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ============================================================================
// GET / PUT / DELETE /celebrations/:celebrationId
// ============================================================================

#[tokio::test]
async fn created_celebration_can_be_fetched_by_id_and_by_user() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &celebration_body()))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .uri(format!("/celebrations/{id}"))
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["person"], "Grandma");

    let request = Request::builder()
        .uri(format!("/celebrations/user/{}", unknown_record_id()))
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_id_parameter_is_a_precondition_failure() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/celebrations/not-a-valid-id")
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    assert_eq!(
        json_body(response).await["errors"][0]["pattern"],
        "Your celebrationId was not a valid record ID"
    );
}

#[tokio::test]
async fn update_with_subset_of_fields_returns_no_content() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &celebration_body()))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/celebrations/{id}"))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::from(
            serde_json::json!({ "plan": "Picnic instead" }).to_string(),
        ))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .uri(format!("/celebrations/{id}"))
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["plan"], "Picnic instead");
    assert_eq!(body["person"], "Grandma");
}

#[tokio::test]
async fn update_with_blank_field_is_a_precondition_failure() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/celebrations/{}", unknown_record_id()))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::from(serde_json::json!({ "person": "  " }).to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    assert_eq!(
        json_body(response).await["errors"][0]["empty"],
        "Person cannot be empty"
    );
}

#[tokio::test]
async fn deleting_a_missing_celebration_yields_the_exact_message() {
    let app = TestApp::new();
    let id = unknown_record_id();

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/celebrations/{id}"))
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await["message"],
        format!("Cannot delete celebration with celebrationId={id}. This celebrationId was not found!")
    );
}

#[tokio::test]
async fn delete_then_get_yields_not_found() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post_celebration(&app, &celebration_body()))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/celebrations/{id}"))
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri(format!("/celebrations/{id}"))
        .header(header::AUTHORIZATION, app.auth_header())
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
