//! Celebration Domain Model
//!
//! A planned celebration for a person (birthday, anniversary, ...) owned by
//! a user, optionally shared with others.

use chrono::{DateTime, Utc};

use super::record_id::RecordId;

/// Who may see a celebration. Defaults to Public when the caller omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Private,
    #[default]
    Public,
}

impl Visibility {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::Public => "Public",
        }
    }
}

impl TryFrom<&str> for Visibility {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Private" => Ok(Self::Private),
            "Public" => Ok(Self::Public),
            other => Err(format!("'{other}' is not a visibility")),
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data required to create a new Celebration
#[derive(Debug, Clone)]
pub struct CreateCelebrationData {
    pub person: String,
    pub occasion: String,
    pub plan: String,
    pub user_id: RecordId,
    pub date: String,
    pub location: Option<String>,
    pub others_involved: Vec<String>,
    pub visibility: Option<Visibility>,
}

/// Data for updating an existing Celebration (all fields optional)
#[derive(Debug, Clone, Default)]
pub struct UpdateCelebrationData {
    pub person: Option<String>,
    pub occasion: Option<String>,
    pub plan: Option<String>,
    pub user_id: Option<RecordId>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub others_involved: Option<Vec<String>>,
    pub visibility: Option<Visibility>,
}

/// Celebration domain entity
#[derive(Debug, Clone)]
pub struct Celebration {
    id: RecordId,
    person: String,
    occasion: String,
    plan: String,
    user_id: RecordId,
    date: String,
    location: Option<String>,
    others_involved: Vec<String>,
    visibility: Visibility,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Celebration {
    /// Create a new Celebration from creation data
    #[must_use]
    pub fn new(data: CreateCelebrationData) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            person: data.person,
            occasion: data.occasion,
            plan: data.plan,
            user_id: data.user_id,
            date: data.date,
            location: data.location,
            others_involved: data.others_involved,
            visibility: data.visibility.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Celebration from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RecordId,
        person: String,
        occasion: String,
        plan: String,
        user_id: RecordId,
        date: String,
        location: Option<String>,
        others_involved: Vec<String>,
        visibility: Visibility,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            person,
            occasion,
            plan,
            user_id,
            date,
            location,
            others_involved,
            visibility,
            created_at,
            updated_at,
        }
    }

    /// Apply a partial update, refreshing the update timestamp
    #[must_use]
    pub fn with_updates(mut self, data: UpdateCelebrationData) -> Self {
        if let Some(person) = data.person {
            self.person = person;
        }
        if let Some(occasion) = data.occasion {
            self.occasion = occasion;
        }
        if let Some(plan) = data.plan {
            self.plan = plan;
        }
        if let Some(user_id) = data.user_id {
            self.user_id = user_id;
        }
        if let Some(date) = data.date {
            self.date = date;
        }
        if let Some(location) = data.location {
            self.location = Some(location);
        }
        if let Some(others_involved) = data.others_involved {
            self.others_involved = others_involved;
        }
        if let Some(visibility) = data.visibility {
            self.visibility = visibility;
        }
        self.updated_at = Utc::now();
        self
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[must_use]
    pub fn person(&self) -> &str {
        &self.person
    }

    #[must_use]
    pub fn occasion(&self) -> &str {
        &self.occasion
    }

    #[must_use]
    pub fn plan(&self) -> &str {
        &self.plan
    }

    #[must_use]
    pub fn user_id(&self) -> &RecordId {
        &self.user_id
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[must_use]
    pub fn others_involved(&self) -> &[String] {
        &self.others_involved
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
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

#[cfg(test)]
mod tests {
    use super::*;

    fn create_data() -> CreateCelebrationData {
        CreateCelebrationData {
            person: "Grandma".to_string(),
            occasion: "80th birthday".to_string(),
            plan: "Surprise dinner".to_string(),
            user_id: RecordId::new(),
            date: "Dec 12, 2026".to_string(),
            location: None,
            others_involved: vec!["Uncle Joe".to_string()],
            visibility: None,
        }
    }

    #[test]
    fn visibility_defaults_to_public_when_absent() {
        let celebration = Celebration::new(create_data());
        assert_eq!(celebration.visibility(), Visibility::Public);
    }

    #[test]
    fn explicit_visibility_is_kept() {
        let mut data = create_data();
        data.visibility = Some(Visibility::Private);
        let celebration = Celebration::new(data);
        assert_eq!(celebration.visibility(), Visibility::Private);
    }

    #[test]
    fn with_updates_only_touches_provided_fields() {
        let celebration = Celebration::new(create_data());
        let person_before = celebration.person().to_string();

        let updated = celebration.with_updates(UpdateCelebrationData {
            plan: Some("Picnic instead".to_string()),
            ..UpdateCelebrationData::default()
        });

        assert_eq!(updated.plan(), "Picnic instead");
        assert_eq!(updated.person(), person_before);
    }

    #[test]
    fn visibility_parses_exact_strings_only() {
        assert_eq!(Visibility::try_from("Public").unwrap(), Visibility::Public);
        assert_eq!(Visibility::try_from("Private").unwrap(), Visibility::Private);
        assert!(Visibility::try_from("public").is_err());
        assert!(Visibility::try_from("Wrong").is_err());
    }
}
