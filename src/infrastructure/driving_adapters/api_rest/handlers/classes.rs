//! Class Handlers
//!
//! Includes the bulk create route for loading a whole schedule at once.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::domain::models::record_id::RecordId;
use crate::infrastructure::driving_adapters::api_rest::dto::class::{
    ClassResponseDto, CreateClassDto, UpdateClassDto,
};
use crate::infrastructure::driving_adapters::api_rest::validation::rules;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for class endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/classes", post(create_class))
        .route("/classes/createWithArray", post(create_classes))
        .route("/classes/user/:userId", get(get_classes_by_user))
        .route(
            "/classes/:classId",
            get(get_class_by_id).put(update_class).delete(delete_class),
        )
}

/// POST /classes - Create a class
///
/// # Responses
///
/// * 201 Created - The created class
/// * 412 Precondition Failed - The body fails validation
#[axum::debug_handler]
async fn create_class(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<ClassResponseDto>), ApiError> {
    rules::class_rules().check(&body)?;
    let dto: CreateClassDto = serde_json::from_value(body)?;

    let class = state.classes.create.execute(dto.try_into()?).await?;

    Ok((StatusCode::CREATED, Json(class.into())))
}

/// POST /classes/createWithArray - Create several classes at once
///
/// Every element must pass the class rules; one bad element fails the whole
/// request before anything is stored.
///
/// # Responses
///
/// * 201 Created - The created classes, in input order
/// * 412 Precondition Failed - Some element fails validation
#[axum::debug_handler]
async fn create_classes(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Vec<ClassResponseDto>>), ApiError> {
    let Some(items) = body.as_array() else {
        return Err(ApiError::BadRequest(
            "Request body must be an array of classes".to_string(),
        ));
    };

    let mut data = Vec::with_capacity(items.len());
    for item in items {
        rules::class_rules().check(item)?;
        let dto: CreateClassDto = serde_json::from_value(item.clone())?;
        data.push(dto.try_into()?);
    }

    let classes = state.classes.create_many.execute(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(classes.into_iter().map(Into::into).collect()),
    ))
}

/// GET /classes/:classId - One class
#[axum::debug_handler]
async fn get_class_by_id(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<ClassResponseDto>, ApiError> {
    rules::check_id_param("classId", &class_id)?;
    let id = RecordId::try_from(class_id.as_str())?;

    let class = state.classes.get_by_id.execute(&id).await?;

    Ok(Json(class.into()))
}

/// GET /classes/user/:userId - All classes belonging to a user
#[axum::debug_handler]
async fn get_classes_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ClassResponseDto>>, ApiError> {
    rules::check_id_param("userId", &user_id)?;
    let user_id = RecordId::try_from(user_id.as_str())?;

    let classes = state.classes.get_by_user.execute(&user_id).await?;

    Ok(Json(classes.into_iter().map(Into::into).collect()))
}

/// PUT /classes/:classId - Update a class
///
/// # Responses
///
/// * 204 No Content - Updated
/// * 404 Not Found - No such class
/// * 412 Precondition Failed - The id parameter or body fails validation
#[axum::debug_handler]
async fn update_class(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<StatusCode, ApiError> {
    rules::check_id_param("classId", &class_id)?;
    rules::class_rules().check(&body)?;
    let id = RecordId::try_from(class_id.as_str())?;
    let dto: UpdateClassDto = serde_json::from_value(body)?;

    state.classes.update.execute(&id, dto.try_into()?).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /classes/:classId - Delete a class
#[axum::debug_handler]
async fn delete_class(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    rules::check_id_param("classId", &class_id)?;
    let id = RecordId::try_from(class_id.as_str())?;

    state.classes.delete.execute(&id).await?;

    Ok(Json(serde_json::json!({
        "message": "Class deleted successfully"
    })))
}
