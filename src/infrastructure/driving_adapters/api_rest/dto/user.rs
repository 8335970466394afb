//! User DTOs
//!
//! The response DTO never carries the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::use_cases::users::{CreateUserInput, UpdateUserInput};
use crate::domain::models::user::User;

/// DTO for creating a user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[serde(default)]
    pub google_id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<CreateUserDto> for CreateUserInput {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            google_id: dto.google_id,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

/// DTO for updating a user; only provided fields change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub google_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserInput {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            google_id: dto.google_id,
            name: dto.name.map(|n| n.trim().to_string()),
            email: dto.email.map(|e| e.trim().to_string()),
            password: dto.password,
        }
    }
}

/// User response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            google_id: user.google_id().map(ToString::to_string),
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}
