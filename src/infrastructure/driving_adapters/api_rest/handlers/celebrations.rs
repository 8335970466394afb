//! Celebration Handlers
//!
//! All celebration routes sit behind the authentication gate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::domain::models::record_id::RecordId;
use crate::infrastructure::driving_adapters::api_rest::dto::celebration::{
    CelebrationResponseDto, CreateCelebrationDto, UpdateCelebrationDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::validation::{rules, UseCase};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for celebration endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/celebrations", post(create_celebration))
        .route("/celebrations/user/:userId", get(get_user_celebrations))
        .route(
            "/celebrations/:celebrationId",
            get(get_celebration_by_id)
                .put(update_celebration)
                .delete(delete_celebration),
        )
}

/// GET /celebrations/user/:userId - All celebrations belonging to a user
///
/// # Responses
///
/// * 200 OK - The user's celebrations
/// * 404 Not Found - The user has no celebrations
/// * 412 Precondition Failed - The userId parameter is not a record id
#[axum::debug_handler]
async fn get_user_celebrations(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<CelebrationResponseDto>>, ApiError> {
    rules::check_id_param("userId", &user_id)?;
    let user_id = RecordId::try_from(user_id.as_str())?;

    let celebrations = state.celebrations.get_by_user.execute(&user_id).await?;

    Ok(Json(celebrations.into_iter().map(Into::into).collect()))
}

/// GET /celebrations/:celebrationId - One celebration
///
/// # Responses
///
/// * 200 OK - The celebration
/// * 404 Not Found - No such celebration
/// * 412 Precondition Failed - The celebrationId parameter is not a record id
#[axum::debug_handler]
async fn get_celebration_by_id(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(celebration_id): Path<String>,
) -> Result<Json<CelebrationResponseDto>, ApiError> {
    rules::check_id_param("celebrationId", &celebration_id)?;
    let id = RecordId::try_from(celebration_id.as_str())?;

    let celebration = state.celebrations.get_by_id.execute(&id).await?;

    Ok(Json(celebration.into()))
}

/// POST /celebrations - Create a celebration
///
/// # Responses
///
/// * 201 Created - The created celebration
/// * 412 Precondition Failed - The body fails the create rules
#[axum::debug_handler]
async fn create_celebration(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<CelebrationResponseDto>), ApiError> {
    rules::celebration_rules(UseCase::Create).check(&body)?;
    let dto: CreateCelebrationDto = serde_json::from_value(body)?;

    let celebration = state.celebrations.create.execute(dto.try_into()?).await?;

    Ok((StatusCode::CREATED, Json(celebration.into())))
}

/// PUT /celebrations/:celebrationId - Update a celebration
///
/// # Responses
///
/// * 204 No Content - Updated
/// * 404 Not Found - No such celebration
/// * 412 Precondition Failed - The id parameter or body fails validation
#[axum::debug_handler]
async fn update_celebration(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(celebration_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<StatusCode, ApiError> {
    rules::check_id_param("celebrationId", &celebration_id)?;
    rules::celebration_rules(UseCase::Update).check(&body)?;
    let id = RecordId::try_from(celebration_id.as_str())?;
    let dto: UpdateCelebrationDto = serde_json::from_value(body)?;

    state
        .celebrations
        .update
        .execute(&id, dto.try_into()?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /celebrations/:celebrationId - Delete a celebration
///
/// # Responses
///
/// * 200 OK - Deleted
/// * 404 Not Found - No such celebration
/// * 412 Precondition Failed - The celebrationId parameter is not a record id
#[axum::debug_handler]
async fn delete_celebration(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(celebration_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    rules::check_id_param("celebrationId", &celebration_id)?;
    let id = RecordId::try_from(celebration_id.as_str())?;

    state.celebrations.delete.execute(&id).await?;

    Ok(Json(serde_json::json!({
        "message": "Celebration deleted successfully"
    })))
}
