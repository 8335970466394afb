//! Class Domain Model
//!
//! A recurring class on a user's schedule: start time, length in minutes,
//! and the weekdays (0-6) it repeats on.

use chrono::{DateTime, Utc};

use super::record_id::RecordId;

/// Data required to create a new Class
#[derive(Debug, Clone)]
pub struct CreateClassData {
    pub name: Option<String>,
    pub teacher: Option<String>,
    pub user_id: RecordId,
    pub start_time: String,
    pub length_minutes: Option<i32>,
    pub days: Vec<i32>,
}

/// Data for updating an existing Class (all fields optional)
#[derive(Debug, Clone, Default)]
pub struct UpdateClassData {
    pub name: Option<String>,
    pub teacher: Option<String>,
    pub user_id: Option<RecordId>,
    pub start_time: Option<String>,
    pub length_minutes: Option<i32>,
    pub days: Option<Vec<i32>>,
}

/// Class domain entity
#[derive(Debug, Clone)]
pub struct Class {
    id: RecordId,
    name: Option<String>,
    teacher: Option<String>,
    user_id: RecordId,
    start_time: String,
    length_minutes: Option<i32>,
    days: Vec<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Class {
    /// Create a new Class from creation data
    #[must_use]
    pub fn new(data: CreateClassData) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            name: data.name,
            teacher: data.teacher,
            user_id: data.user_id,
            start_time: data.start_time,
            length_minutes: data.length_minutes,
            days: data.days,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Class from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RecordId,
        name: Option<String>,
        teacher: Option<String>,
        user_id: RecordId,
        start_time: String,
        length_minutes: Option<i32>,
        days: Vec<i32>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            teacher,
            user_id,
            start_time,
            length_minutes,
            days,
            created_at,
            updated_at,
        }
    }

    /// Apply a partial update, refreshing the update timestamp
    #[must_use]
    pub fn with_updates(mut self, data: UpdateClassData) -> Self {
        if let Some(name) = data.name {
            self.name = Some(name);
        }
        if let Some(teacher) = data.teacher {
            self.teacher = Some(teacher);
        }
        if let Some(user_id) = data.user_id {
            self.user_id = user_id;
        }
        if let Some(start_time) = data.start_time {
            self.start_time = start_time;
        }
        if let Some(length_minutes) = data.length_minutes {
            self.length_minutes = Some(length_minutes);
        }
        if let Some(days) = data.days {
            self.days = days;
        }
        self.updated_at = Utc::now();
        self
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn teacher(&self) -> Option<&str> {
        self.teacher.as_deref()
    }

    #[must_use]
    pub fn user_id(&self) -> &RecordId {
        &self.user_id
    }

    #[must_use]
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    #[must_use]
    pub fn length_minutes(&self) -> Option<i32> {
        self.length_minutes
    }

    #[must_use]
    pub fn days(&self) -> &[i32] {
        &self.days
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
