//! Revoked Token Repository Gateway
//!
//! The persisted blacklist of tokens invalidated by logout. Queried on every
//! authenticated request; a store failure makes the gate fail closed.

use async_trait::async_trait;

use crate::shared::errors::RepositoryError;

/// Repository trait for the token revocation list
#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
    /// Record a token as revoked. Recording the same token twice is not an
    /// error.
    async fn insert(&self, token: &str) -> Result<(), RepositoryError>;

    /// Whether the exact token string has been revoked
    async fn contains(&self, token: &str) -> Result<bool, RepositoryError>;
}
