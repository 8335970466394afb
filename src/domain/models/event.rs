//! Event Domain Model

use chrono::{DateTime, Utc};

use super::record_id::RecordId;

/// Data required to create a new Event
#[derive(Debug, Clone)]
pub struct CreateEventData {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub user_id: RecordId,
}

/// Data for updating an existing Event (all fields optional)
#[derive(Debug, Clone, Default)]
pub struct UpdateEventData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub user_id: Option<RecordId>,
}

/// Event domain entity. The date is kept as the ISO-8601 text the caller
/// submitted; the validation chain guarantees its shape.
#[derive(Debug, Clone)]
pub struct Event {
    id: RecordId,
    name: String,
    description: String,
    date: String,
    location: String,
    user_id: RecordId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new Event from creation data
    #[must_use]
    pub fn new(data: CreateEventData) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            name: data.name,
            description: data.description,
            date: data.date,
            location: data.location,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore an Event from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RecordId,
        name: String,
        description: String,
        date: String,
        location: String,
        user_id: RecordId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            date,
            location,
            user_id,
            created_at,
            updated_at,
        }
    }

    /// Apply a partial update, refreshing the update timestamp
    #[must_use]
    pub fn with_updates(mut self, data: UpdateEventData) -> Self {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(date) = data.date {
            self.date = date;
        }
        if let Some(location) = data.location {
            self.location = location;
        }
        if let Some(user_id) = data.user_id {
            self.user_id = user_id;
        }
        self.updated_at = Utc::now();
        self
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn user_id(&self) -> &RecordId {
        &self.user_id
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
