//! User Handlers
//!
//! Reads are public; writes sit behind the authentication gate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::domain::models::record_id::RecordId;
use crate::infrastructure::driving_adapters::api_rest::dto::user::{
    CreateUserDto, UpdateUserDto, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::validation::{rules, UseCase};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_all_users))
        .route("/user", axum::routing::post(create_user))
        .route(
            "/user/:userId",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
}

/// GET /users - All users, sorted by name
///
/// # Responses
///
/// * 200 OK - All users
/// * 404 Not Found - No users exist yet
#[axum::debug_handler]
async fn get_all_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponseDto>>, ApiError> {
    let users = state.users.get_all.execute().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /user/:userId - One user
///
/// # Responses
///
/// * 200 OK - The user
/// * 404 Not Found - No such user
/// * 412 Precondition Failed - The userId parameter is not a record id
#[axum::debug_handler]
async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponseDto>, ApiError> {
    rules::check_id_param("userId", &user_id)?;
    let id = RecordId::try_from(user_id.as_str())?;

    let user = state.users.get_by_id.execute(&id).await?;

    Ok(Json(user.into()))
}

/// POST /user - Create a user
///
/// # Responses
///
/// * 201 Created - The created user (never includes the password hash)
/// * 412 Precondition Failed - The body fails the create rules
#[axum::debug_handler]
async fn create_user(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    rules::user_rules(UseCase::Create).check(&body)?;
    let dto: CreateUserDto = serde_json::from_value(body)?;

    let user = state.users.create.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /user/:userId - Update a user
///
/// # Responses
///
/// * 204 No Content - Updated
/// * 404 Not Found - No such user
/// * 412 Precondition Failed - The id parameter or body fails validation
#[axum::debug_handler]
async fn update_user(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<StatusCode, ApiError> {
    rules::check_id_param("userId", &user_id)?;
    rules::user_rules(UseCase::Update).check(&body)?;
    let id = RecordId::try_from(user_id.as_str())?;
    let dto: UpdateUserDto = serde_json::from_value(body)?;

    state.users.update.execute(&id, dto.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /user/:userId - Delete a user
///
/// # Responses
///
/// * 200 OK - Deleted
/// * 404 Not Found - No such user
/// * 412 Precondition Failed - The userId parameter is not a record id
#[axum::debug_handler]
async fn delete_user(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    rules::check_id_param("userId", &user_id)?;
    let id = RecordId::try_from(user_id.as_str())?;

    state.users.delete.execute(&id).await?;

    Ok(Json(serde_json::json!({
        "message": "User deleted successfully"
    })))
}
