//! PostgreSQL Class Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::ClassRepository;
use crate::domain::models::class::Class;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct ClassRow {
    id: String,
    name: Option<String>,
    teacher: Option<String>,
    user_id: String,
    start_time: String,
    length_minutes: Option<i32>,
    days: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClassRow> for Class {
    type Error = RepositoryError;

    fn try_from(row: ClassRow) -> Result<Self, Self::Error> {
        let id = RecordId::try_from(row.id)
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;
        let user_id = RecordId::try_from(row.user_id)
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;
        let days: Vec<i32> = serde_json::from_value(row.days)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse days: {e}")))?;

        Ok(Class::restore(
            id,
            row.name,
            row.teacher,
            user_id,
            row.start_time,
            row.length_minutes,
            days,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL implementation of ClassRepository
pub struct PostgresClassRepository {
    pool: PgPool,
}

impl PostgresClassRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for PostgresClassRepository {
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Class>, RepositoryError> {
        let row = sqlx::query_as::<_, ClassRow>(
            r#"
            SELECT id, name, teacher, user_id, start_time, length_minutes, days,
                   created_at, updated_at
            FROM classes
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Class::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: &RecordId) -> Result<Vec<Class>, RepositoryError> {
        let rows = sqlx::query_as::<_, ClassRow>(
            r#"
            SELECT id, name, teacher, user_id, start_time, length_minutes, days,
                   created_at, updated_at
            FROM classes
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Class::try_from).collect()
    }

    async fn create(&self, class: &Class) -> Result<(), RepositoryError> {
        let days = serde_json::to_value(class.days())
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO classes
                (id, name, teacher, user_id, start_time, length_minutes, days,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(class.id().as_str())
        .bind(class.name())
        .bind(class.teacher())
        .bind(class.user_id().as_str())
        .bind(class.start_time())
        .bind(class.length_minutes())
        .bind(days)
        .bind(class.created_at())
        .bind(class.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create_many(&self, classes: &[Class]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        for class in classes {
            let days = serde_json::to_value(class.days())
                .map_err(|e| RepositoryError::Mapping(e.to_string()))?;

            sqlx::query(
                r#"
                INSERT INTO classes
                    (id, name, teacher, user_id, start_time, length_minutes, days,
                     created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(class.id().as_str())
            .bind(class.name())
            .bind(class.teacher())
            .bind(class.user_id().as_str())
            .bind(class.start_time())
            .bind(class.length_minutes())
            .bind(days)
            .bind(class.created_at())
            .bind(class.updated_at())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn update(&self, class: &Class) -> Result<bool, RepositoryError> {
        let days = serde_json::to_value(class.days())
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;

        let result = sqlx::query(
            r#"
            UPDATE classes
            SET name = $2, teacher = $3, user_id = $4, start_time = $5,
                length_minutes = $6, days = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(class.id().as_str())
        .bind(class.name())
        .bind(class.teacher())
        .bind(class.user_id().as_str())
        .bind(class.start_time())
        .bind(class.length_minutes())
        .bind(days)
        .bind(class.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
