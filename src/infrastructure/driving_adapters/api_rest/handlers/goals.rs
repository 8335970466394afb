//! Goal Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::domain::models::record_id::RecordId;
use crate::infrastructure::driving_adapters::api_rest::dto::goal::{
    CreateGoalDto, GoalResponseDto, UpdateGoalDto,
};
use crate::infrastructure::driving_adapters::api_rest::validation::{rules, UseCase};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for goal endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/goals", post(create_goal))
        .route("/goals/user/:userId", get(get_goals_by_user))
        .route(
            "/goals/:goalId",
            get(get_goal_by_id).put(update_goal).delete(delete_goal),
        )
}

/// POST /goals - Create a goal
///
/// # Responses
///
/// * 201 Created - The created goal
/// * 412 Precondition Failed - The body fails the create rules
#[axum::debug_handler]
async fn create_goal(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<GoalResponseDto>), ApiError> {
    rules::goal_rules(UseCase::Create).check(&body)?;
    let dto: CreateGoalDto = serde_json::from_value(body)?;

    let goal = state.goals.create.execute(dto.try_into()?).await?;

    Ok((StatusCode::CREATED, Json(goal.into())))
}

/// GET /goals/:goalId - One goal
#[axum::debug_handler]
async fn get_goal_by_id(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> Result<Json<GoalResponseDto>, ApiError> {
    rules::check_id_param("goalId", &goal_id)?;
    let id = RecordId::try_from(goal_id.as_str())?;

    let goal = state.goals.get_by_id.execute(&id).await?;

    Ok(Json(goal.into()))
}

/// GET /goals/user/:userId - All goals belonging to a user
#[axum::debug_handler]
async fn get_goals_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<GoalResponseDto>>, ApiError> {
    rules::check_id_param("userId", &user_id)?;
    let user_id = RecordId::try_from(user_id.as_str())?;

    let goals = state.goals.get_by_user.execute(&user_id).await?;

    Ok(Json(goals.into_iter().map(Into::into).collect()))
}

/// PUT /goals/:goalId - Update a goal
///
/// # Responses
///
/// * 204 No Content - Updated
/// * 404 Not Found - No such goal
/// * 412 Precondition Failed - The id parameter or body fails validation
#[axum::debug_handler]
async fn update_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<StatusCode, ApiError> {
    rules::check_id_param("goalId", &goal_id)?;
    rules::goal_rules(UseCase::Update).check(&body)?;
    let id = RecordId::try_from(goal_id.as_str())?;
    let dto: UpdateGoalDto = serde_json::from_value(body)?;

    state.goals.update.execute(&id, dto.try_into()?).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /goals/:goalId - Delete a goal
#[axum::debug_handler]
async fn delete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    rules::check_id_param("goalId", &goal_id)?;
    let id = RecordId::try_from(goal_id.as_str())?;

    state.goals.delete.execute(&id).await?;

    Ok(Json(serde_json::json!({
        "message": "Goal deleted successfully"
    })))
}
