//! Class DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::class::{Class, CreateClassData, UpdateClassData};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::ApiError;

/// DTO for creating a class
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    pub user_id: String,
    pub start_time: String,
    #[serde(default)]
    pub length: Option<i32>,
    #[serde(default)]
    pub days: Vec<i32>,
}

impl TryFrom<CreateClassDto> for CreateClassData {
    type Error = ApiError;

    fn try_from(dto: CreateClassDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            teacher: dto.teacher.map(|t| t.trim().to_string()),
            user_id: RecordId::try_from(dto.user_id.as_str())?,
            start_time: dto.start_time.trim().to_string(),
            length_minutes: dto.length,
            days: dto.days,
        })
    }
}

/// DTO for updating a class; only provided fields change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassDto {
    pub name: Option<String>,
    pub teacher: Option<String>,
    pub user_id: Option<String>,
    pub start_time: Option<String>,
    pub length: Option<i32>,
    pub days: Option<Vec<i32>>,
}

impl TryFrom<UpdateClassDto> for UpdateClassData {
    type Error = ApiError;

    fn try_from(dto: UpdateClassDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            teacher: dto.teacher.map(|t| t.trim().to_string()),
            user_id: dto
                .user_id
                .map(|u| RecordId::try_from(u.as_str()))
                .transpose()?,
            start_time: dto.start_time.map(|s| s.trim().to_string()),
            length_minutes: dto.length,
            days: dto.days,
        })
    }
}

/// Class response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassResponseDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    pub user_id: String,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    pub days: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Class> for ClassResponseDto {
    fn from(class: Class) -> Self {
        Self {
            id: class.id().to_string(),
            name: class.name().map(ToString::to_string),
            teacher: class.teacher().map(ToString::to_string),
            user_id: class.user_id().to_string(),
            start_time: class.start_time().to_string(),
            length: class.length_minutes(),
            days: class.days().to_vec(),
            created_at: class.created_at(),
            updated_at: class.updated_at(),
        }
    }
}
