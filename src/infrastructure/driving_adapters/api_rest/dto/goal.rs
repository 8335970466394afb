//! Goal DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::goal::{CreateGoalData, Goal, UpdateGoalData};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::ApiError;

/// DTO for creating a goal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalDto {
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub user_id: String,
}

impl TryFrom<CreateGoalDto> for CreateGoalData {
    type Error = ApiError;

    fn try_from(dto: CreateGoalDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            due_date: dto.due_date.trim().to_string(),
            user_id: RecordId::try_from(dto.user_id.as_str())?,
        })
    }
}

/// DTO for updating a goal; only provided fields change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub user_id: Option<String>,
}

impl TryFrom<UpdateGoalDto> for UpdateGoalData {
    type Error = ApiError;

    fn try_from(dto: UpdateGoalDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            due_date: dto.due_date.map(|d| d.trim().to_string()),
            user_id: dto
                .user_id
                .map(|u| RecordId::try_from(u.as_str()))
                .transpose()?,
        })
    }
}

/// Goal response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponseDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Goal> for GoalResponseDto {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id().to_string(),
            name: goal.name().to_string(),
            description: goal.description().to_string(),
            due_date: goal.due_date().to_string(),
            user_id: goal.user_id().to_string(),
            created_at: goal.created_at(),
            updated_at: goal.updated_at(),
        }
    }
}
