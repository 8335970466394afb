//! PostgreSQL Revoked Token Repository
//!
//! Entries are write-once and never pruned: an expired token stops
//! verifying on its own, so rows for it are merely dead weight.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::RevokedTokenRepository;
use crate::shared::errors::RepositoryError;

/// PostgreSQL implementation of RevokedTokenRepository
pub struct PostgresRevokedTokenRepository {
    pool: PgPool,
}

impl PostgresRevokedTokenRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevokedTokenRepository for PostgresRevokedTokenRepository {
    async fn insert(&self, token: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (token)
            VALUES ($1)
            ON CONFLICT (token) DO NOTHING
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, RepositoryError> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM revoked_tokens WHERE token = $1)")
                .bind(token)
                .fetch_one(&self.pool)
                .await?;

        Ok(row.0)
    }
}
