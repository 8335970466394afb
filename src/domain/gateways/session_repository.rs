//! Session Repository Gateway

use async_trait::async_trait;

use crate::domain::models::auth::Session;
use crate::shared::errors::RepositoryError;

/// Repository trait for server-side session records
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session
    async fn create(&self, session: &Session) -> Result<(), RepositoryError>;

    /// Find a session by the id carried in the `sid` cookie
    async fn find_by_id(&self, id: &str) -> Result<Option<Session>, RepositoryError>;

    /// Delete a session by id; false when no such session exists
    async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError>;

    /// Delete every session holding the given token; false when none did
    async fn delete_by_token(&self, token: &str) -> Result<bool, RepositoryError>;
}
