//! Event DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::event::{CreateEventData, Event, UpdateEventData};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::ApiError;

/// DTO for creating an event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub user_id: String,
}

impl TryFrom<CreateEventDto> for CreateEventData {
    type Error = ApiError;

    fn try_from(dto: CreateEventDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            date: dto.date.trim().to_string(),
            location: dto.location.trim().to_string(),
            user_id: RecordId::try_from(dto.user_id.as_str())?,
        })
    }
}

/// DTO for updating an event; only provided fields change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub user_id: Option<String>,
}

impl TryFrom<UpdateEventDto> for UpdateEventData {
    type Error = ApiError;

    fn try_from(dto: UpdateEventDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            date: dto.date.map(|d| d.trim().to_string()),
            location: dto.location.map(|l| l.trim().to_string()),
            user_id: dto
                .user_id
                .map(|u| RecordId::try_from(u.as_str()))
                .transpose()?,
        })
    }
}

/// Event response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponseDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponseDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id().to_string(),
            name: event.name().to_string(),
            description: event.description().to_string(),
            date: event.date().to_string(),
            location: event.location().to_string(),
            user_id: event.user_id().to_string(),
            created_at: event.created_at(),
            updated_at: event.updated_at(),
        }
    }
}
