//! End Expired Session Use Case
//!
//! The teardown step that follows a `Rejected(Expired)` gate decision. Kept
//! separate from the decision itself so the gate stays side-effect free.

use std::sync::Arc;

use crate::domain::gateways::SessionRepository;
use crate::shared::errors::UseCaseError;

/// Use case destroying the server-side session of an expired token
pub struct EndExpiredSessionUseCase {
    sessions: Arc<dyn SessionRepository>,
}

impl EndExpiredSessionUseCase {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Execute the use case. The expired token may never have had a session
    /// (or it was already cleaned up); that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Internal` when the session store fails.
    pub async fn execute(&self, token: &str) -> Result<(), UseCaseError> {
        let removed = self
            .sessions
            .delete_by_token(token)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to clear expired session");
                UseCaseError::Internal("Error clearing session".to_string())
            })?;

        if removed {
            tracing::debug!("Cleared session for expired token");
        }
        Ok(())
    }
}
