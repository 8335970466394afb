//! Celebration DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::celebration::{
    Celebration, CreateCelebrationData, UpdateCelebrationData, Visibility,
};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::ApiError;

fn parse_visibility(value: Option<&str>) -> Result<Option<Visibility>, ApiError> {
    value
        .map(Visibility::try_from)
        .transpose()
        .map_err(ApiError::BadRequest)
}

/// DTO for creating a celebration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCelebrationDto {
    pub person: String,
    pub occasion: String,
    pub plan: String,
    pub user: String,
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub others_involved: Vec<String>,
    #[serde(default)]
    pub visibility: Option<String>,
}

impl TryFrom<CreateCelebrationDto> for CreateCelebrationData {
    type Error = ApiError;

    fn try_from(dto: CreateCelebrationDto) -> Result<Self, Self::Error> {
        Ok(Self {
            person: dto.person.trim().to_string(),
            occasion: dto.occasion.trim().to_string(),
            plan: dto.plan.trim().to_string(),
            user_id: RecordId::try_from(dto.user.as_str())?,
            date: dto.date.trim().to_string(),
            location: dto.location.map(|l| l.trim().to_string()),
            others_involved: dto
                .others_involved
                .into_iter()
                .map(|o| o.trim().to_string())
                .collect(),
            visibility: parse_visibility(dto.visibility.as_deref())?,
        })
    }
}

/// DTO for updating a celebration; only provided fields change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCelebrationDto {
    pub person: Option<String>,
    pub occasion: Option<String>,
    pub plan: Option<String>,
    pub user: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub others_involved: Option<Vec<String>>,
    pub visibility: Option<String>,
}

impl TryFrom<UpdateCelebrationDto> for UpdateCelebrationData {
    type Error = ApiError;

    fn try_from(dto: UpdateCelebrationDto) -> Result<Self, Self::Error> {
        Ok(Self {
            person: dto.person.map(|p| p.trim().to_string()),
            occasion: dto.occasion.map(|o| o.trim().to_string()),
            plan: dto.plan.map(|p| p.trim().to_string()),
            user_id: dto
                .user
                .map(|u| RecordId::try_from(u.as_str()))
                .transpose()?,
            date: dto.date.map(|d| d.trim().to_string()),
            location: dto.location.map(|l| l.trim().to_string()),
            others_involved: dto
                .others_involved
                .map(|o| o.into_iter().map(|s| s.trim().to_string()).collect()),
            visibility: parse_visibility(dto.visibility.as_deref())?,
        })
    }
}

/// Celebration response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrationResponseDto {
    pub id: String,
    pub person: String,
    pub occasion: String,
    pub plan: String,
    pub user: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub others_involved: Vec<String>,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Celebration> for CelebrationResponseDto {
    fn from(celebration: Celebration) -> Self {
        Self {
            id: celebration.id().to_string(),
            person: celebration.person().to_string(),
            occasion: celebration.occasion().to_string(),
            plan: celebration.plan().to_string(),
            user: celebration.user_id().to_string(),
            date: celebration.date().to_string(),
            location: celebration.location().map(ToString::to_string),
            others_involved: celebration.others_involved().to_vec(),
            visibility: celebration.visibility().as_str().to_string(),
            created_at: celebration.created_at(),
            updated_at: celebration.updated_at(),
        }
    }
}
