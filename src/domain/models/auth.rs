//! Authentication Domain Types
//!
//! The gate's decision value, the identity it attaches to admitted requests,
//! and the server-side session record tied to the `sid` cookie.

use chrono::{DateTime, Utc};

use super::record_id::RecordId;

/// Profile handed back by the external OAuth identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthProfile {
    pub google_id: String,
    pub name: String,
    pub email: String,
}

/// Identity attached to the request context once a token is admitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub google_id: String,
    pub name: String,
    pub email: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Why a request was turned away at the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// No bearer token on the request
    MissingCredential,
    /// The token is on the revocation list (post-logout reuse)
    Revoked,
    /// The token's signature does not verify
    Invalid,
    /// The token's expiry timestamp has passed
    Expired,
    /// The revocation store could not be queried; the gate fails closed
    Internal,
}

/// Outcome of the authentication gate. A pure value: the gate itself never
/// performs session teardown, so the decision stays independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Admitted(AuthenticatedUser),
    Rejected(RejectionReason),
}

/// Server-side session record created at OAuth completion
#[derive(Debug, Clone)]
pub struct Session {
    id: RecordId,
    token: String,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session holding a freshly minted token
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            id: RecordId::new(),
            token,
            created_at: Utc::now(),
        }
    }

    /// Restore a session from persisted data
    #[must_use]
    pub fn restore(id: RecordId, token: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            token,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
