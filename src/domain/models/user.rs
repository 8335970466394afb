//! User Domain Model

use chrono::{DateTime, Utc};

use super::record_id::RecordId;

/// Data required to create a new User. The password, when present, arrives
/// already hashed: the domain never sees plaintext credentials.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub google_id: Option<String>,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}

/// Data for updating an existing User (all fields optional)
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub google_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    id: RecordId,
    google_id: Option<String>,
    name: String,
    email: String,
    password_hash: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User from creation data
    #[must_use]
    pub fn new(data: CreateUserData) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            google_id: data.google_id,
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(
        id: RecordId,
        google_id: Option<String>,
        name: String,
        email: String,
        password_hash: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            google_id,
            name,
            email,
            password_hash,
            created_at,
            updated_at,
        }
    }

    /// Apply a partial update, refreshing the update timestamp
    #[must_use]
    pub fn with_updates(mut self, data: UpdateUserData) -> Self {
        if let Some(google_id) = data.google_id {
            self.google_id = Some(google_id);
        }
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
        if let Some(password_hash) = data.password_hash {
            self.password_hash = Some(password_hash);
        }
        self.updated_at = Utc::now();
        self
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[must_use]
    pub fn google_id(&self) -> Option<&str> {
        self.google_id.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
