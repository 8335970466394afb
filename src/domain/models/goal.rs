//! Goal Domain Model

use chrono::{DateTime, Utc};

use super::record_id::RecordId;

/// Data required to create a new Goal
#[derive(Debug, Clone)]
pub struct CreateGoalData {
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub user_id: RecordId,
}

/// Data for updating an existing Goal (all fields optional)
#[derive(Debug, Clone, Default)]
pub struct UpdateGoalData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub user_id: Option<RecordId>,
}

/// Goal domain entity. The due date stays in the textual form the caller
/// submitted (one of the four accepted date formats).
#[derive(Debug, Clone)]
pub struct Goal {
    id: RecordId,
    name: String,
    description: String,
    due_date: String,
    user_id: RecordId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new Goal from creation data
    #[must_use]
    pub fn new(data: CreateGoalData) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            name: data.name,
            description: data.description,
            due_date: data.due_date,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Goal from persisted data
    #[must_use]
    pub fn restore(
        id: RecordId,
        name: String,
        description: String,
        due_date: String,
        user_id: RecordId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            due_date,
            user_id,
            created_at,
            updated_at,
        }
    }

    /// Apply a partial update, refreshing the update timestamp
    #[must_use]
    pub fn with_updates(mut self, data: UpdateGoalData) -> Self {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(due_date) = data.due_date {
            self.due_date = due_date;
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
    pub fn due_date(&self) -> &str {
        &self.due_date
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
