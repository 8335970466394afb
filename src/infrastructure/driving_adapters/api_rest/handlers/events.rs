//! Event Handlers
//!
//! Events are validated but not gated: the same field rules apply to create
//! and update.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::domain::models::record_id::RecordId;
use crate::infrastructure::driving_adapters::api_rest::dto::event::{
    CreateEventDto, EventResponseDto, UpdateEventDto,
};
use crate::infrastructure::driving_adapters::api_rest::validation::rules;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for event endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(get_all_events).post(create_event))
        .route(
            "/events/:eventId",
            get(get_event_by_id).put(update_event).delete(delete_event),
        )
}

/// GET /events - All events
#[axum::debug_handler]
async fn get_all_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponseDto>>, ApiError> {
    let events = state.events.get_all.execute().await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// GET /events/:eventId - One event
#[axum::debug_handler]
async fn get_event_by_id(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventResponseDto>, ApiError> {
    rules::check_id_param("eventId", &event_id)?;
    let id = RecordId::try_from(event_id.as_str())?;

    let event = state.events.get_by_id.execute(&id).await?;

    Ok(Json(event.into()))
}

/// POST /events - Create an event
///
/// # Responses
///
/// * 201 Created - The created event
/// * 412 Precondition Failed - The body fails validation
#[axum::debug_handler]
async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<EventResponseDto>), ApiError> {
    rules::event_rules().check(&body)?;
    let dto: CreateEventDto = serde_json::from_value(body)?;

    let event = state.events.create.execute(dto.try_into()?).await?;

    Ok((StatusCode::CREATED, Json(event.into())))
}

/// PUT /events/:eventId - Update an event
///
/// # Responses
///
/// * 204 No Content - Updated
/// * 404 Not Found - No such event
/// * 412 Precondition Failed - The id parameter or body fails validation
#[axum::debug_handler]
async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<StatusCode, ApiError> {
    rules::check_id_param("eventId", &event_id)?;
    rules::event_rules().check(&body)?;
    let id = RecordId::try_from(event_id.as_str())?;
    let dto: UpdateEventDto = serde_json::from_value(body)?;

    state.events.update.execute(&id, dto.try_into()?).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /events/:eventId - Delete an event
#[axum::debug_handler]
async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    rules::check_id_param("eventId", &event_id)?;
    let id = RecordId::try_from(event_id.as_str())?;

    state.events.delete.execute(&id).await?;

    Ok(Json(serde_json::json!({
        "message": "Event deleted successfully"
    })))
}
