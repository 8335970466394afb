//! PostgreSQL Goal Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::GoalRepository;
use crate::domain::models::goal::Goal;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct GoalRow {
    id: String,
    name: String,
    description: String,
    due_date: String,
    user_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<GoalRow> for Goal {
    type Error = RepositoryError;

    fn try_from(row: GoalRow) -> Result<Self, Self::Error> {
        let id = RecordId::try_from(row.id)
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;
        let user_id = RecordId::try_from(row.user_id)
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;

        Ok(Goal::restore(
            id,
            row.name,
            row.description,
            row.due_date,
            user_id,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL implementation of GoalRepository
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Goal>, RepositoryError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, name, description, due_date, user_id, created_at, updated_at
            FROM goals
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Goal::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: &RecordId) -> Result<Vec<Goal>, RepositoryError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, name, description, due_date, user_id, created_at, updated_at
            FROM goals
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Goal::try_from).collect()
    }

    async fn create(&self, goal: &Goal) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO goals (id, name, description, due_date, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(goal.id().as_str())
        .bind(goal.name())
        .bind(goal.description())
        .bind(goal.due_date())
        .bind(goal.user_id().as_str())
        .bind(goal.created_at())
        .bind(goal.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, goal: &Goal) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE goals
            SET name = $2, description = $3, due_date = $4, user_id = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(goal.id().as_str())
        .bind(goal.name())
        .bind(goal.description())
        .bind(goal.due_date())
        .bind(goal.user_id().as_str())
        .bind(goal.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
