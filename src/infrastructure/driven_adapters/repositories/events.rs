//! PostgreSQL Event Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::EventRepository;
use crate::domain::models::event::Event;
use crate::domain::models::record_id::RecordId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: String,
    name: String,
    description: String,
    date: String,
    location: String,
    user_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = RepositoryError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let id = RecordId::try_from(row.id)
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;
        let user_id = RecordId::try_from(row.user_id)
            .map_err(|e| RepositoryError::Mapping(e.to_string()))?;

        Ok(Event::restore(
            id,
            row.name,
            row.description,
            row.date,
            row.location,
            user_id,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL implementation of EventRepository
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Event>, RepositoryError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, description, date, location, user_id, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Event::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Event>, RepositoryError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, description, date, location, user_id, created_at, updated_at
            FROM events
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn create(&self, event: &Event) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO events (id, name, description, date, location, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(event.id().as_str())
        .bind(event.name())
        .bind(event.description())
        .bind(event.date())
        .bind(event.location())
        .bind(event.user_id().as_str())
        .bind(event.created_at())
        .bind(event.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET name = $2, description = $3, date = $4, location = $5, user_id = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(event.id().as_str())
        .bind(event.name())
        .bind(event.description())
        .bind(event.date())
        .bind(event.location())
        .bind(event.user_id().as_str())
        .bind(event.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
