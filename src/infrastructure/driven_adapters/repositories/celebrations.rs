//! PostgreSQL Celebration Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::CelebrationRepository;
use crate::domain::models::celebration::{Celebration, Visibility};
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct CelebrationRow {
    id: String,
    person: String,
    occasion: String,
    plan: String,
    user_id: String,
    date: String,
    location: Option<String>,
    others_involved: serde_json::Value,
    visibility: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CelebrationRow> for Celebration {
    type Error = RepositoryError;

    fn try_from(row: CelebrationRow) -> Result<Self, Self::Error> {
        let id = RecordId::try_from(row.id)
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;
        let user_id = RecordId::try_from(row.user_id)
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;
        let others_involved: Vec<String> = serde_json::from_value(row.others_involved)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse others_involved: {e}")))?;
        let visibility = Visibility::try_from(row.visibility.as_str())
            .map_err(RepositoryError::Mapping)?;

        Ok(Celebration::restore(
            id,
            row.person,
            row.occasion,
            row.plan,
            user_id,
            row.date,
            row.location,
            others_involved,
            visibility,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL implementation of CelebrationRepository
pub struct PostgresCelebrationRepository {
    pool: PgPool,
}

impl PostgresCelebrationRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CelebrationRepository for PostgresCelebrationRepository {
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Celebration>, RepositoryError> {
        let row = sqlx::query_as::<_, CelebrationRow>(
            r#"
            SELECT id, person, occasion, plan, user_id, date, location,
                   others_involved, visibility, created_at, updated_at
            FROM celebrations
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Celebration::try_from).transpose()
    }

    async fn find_by_user_id(
        &self,
        user_id: &RecordId,
    ) -> Result<Vec<Celebration>, RepositoryError> {
        let rows = sqlx::query_as::<_, CelebrationRow>(
            r#"
            SELECT id, person, occasion, plan, user_id, date, location,
                   others_involved, visibility, created_at, updated_at
            FROM celebrations
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Celebration::try_from).collect()
    }

    async fn create(&self, celebration: &Celebration) -> Result<(), RepositoryError> {
        let others = serde_json::to_value(celebration.others_involved())
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO celebrations
                (id, person, occasion, plan, user_id, date, location,
                 others_involved, visibility, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(celebration.id().as_str())
        .bind(celebration.person())
        .bind(celebration.occasion())
        .bind(celebration.plan())
        .bind(celebration.user_id().as_str())
        .bind(celebration.date())
        .bind(celebration.location())
        .bind(others)
        .bind(celebration.visibility().as_str())
        .bind(celebration.created_at())
        .bind(celebration.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, celebration: &Celebration) -> Result<bool, RepositoryError> {
        let others = serde_json::to_value(celebration.others_involved())
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;

        let result = sqlx::query(
            r#"
            UPDATE celebrations
            SET person = $2, occasion = $3, plan = $4, user_id = $5, date = $6,
                location = $7, others_involved = $8, visibility = $9, updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(celebration.id().as_str())
        .bind(celebration.person())
        .bind(celebration.occasion())
        .bind(celebration.plan())
        .bind(celebration.user_id().as_str())
        .bind(celebration.date())
        .bind(celebration.location())
        .bind(others)
        .bind(celebration.visibility().as_str())
        .bind(celebration.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM celebrations WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
