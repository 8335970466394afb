//! Request Validation Chain
//!
//! Builds, per resource and per use case, an ordered sequence of field-level
//! checks and evaluates them against the raw request body. Every applicable
//! check runs; all failures are collected in rule-declaration order and
//! surfaced together as a single 412 response. A field absent under the
//! optional branch is not an error; a field present but empty after trimming
//! always is.

pub mod rules;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use validator::ValidateEmail;

use crate::shared::errors::{ApiError, ValidationFailure};

/// Which rule branch applies to the request. Selected statically per route,
/// so a create body can never be evaluated under update rules or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

/// Special characters accepted by the password composition check
const PASSWORD_SPECIALS: &str = "#@$!%*?&";

#[derive(Debug)]
enum Check {
    /// Trimmed value must be non-empty
    NonEmpty,
    /// Trimmed value must not exceed the maximum character count
    MaxLength(usize),
    /// Trimmed value must match the pattern
    Pattern {
        regex: &'static Regex,
        message: String,
    },
    /// Value must match one of the four accepted textual date formats
    TextualDate,
    /// Value must parse as an ISO 8601 date or datetime
    Iso8601,
    /// Trimmed value must be a well-formed email address
    Email,
    /// Value must satisfy the password complexity policy
    Password,
    /// Value must be a non-empty array of non-empty strings
    StringArray,
    /// Value must be one of a fixed set of strings
    OneOf {
        allowed: &'static [&'static str],
        message: String,
    },
}

/// The ordered checks declared for one body field
#[derive(Debug)]
pub struct FieldRules {
    field: &'static str,
    label: String,
    presence: Presence,
    checks: Vec<Check>,
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl FieldRules {
    /// The field must be present; its checks run unconditionally
    #[must_use]
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            label: capitalize(field),
            presence: Presence::Required,
            checks: Vec::new(),
        }
    }

    /// The field may be absent; its checks run only when it is present
    #[must_use]
    pub fn optional(field: &'static str) -> Self {
        Self {
            field,
            label: capitalize(field),
            presence: Presence::Optional,
            checks: Vec::new(),
        }
    }

    /// Override the display name used in generated messages
    #[must_use]
    pub fn labeled(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    #[must_use]
    pub fn non_empty(mut self) -> Self {
        self.checks.push(Check::NonEmpty);
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.checks.push(Check::MaxLength(max));
        self
    }

    #[must_use]
    pub fn pattern(mut self, regex: &'static Regex, message: impl Into<String>) -> Self {
        self.checks.push(Check::Pattern {
            regex,
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn textual_date(mut self) -> Self {
        self.checks.push(Check::TextualDate);
        self
    }

    #[must_use]
    pub fn iso8601(mut self) -> Self {
        self.checks.push(Check::Iso8601);
        self
    }

    #[must_use]
    pub fn email(mut self) -> Self {
        self.checks.push(Check::Email);
        self
    }

    #[must_use]
    pub fn password(mut self) -> Self {
        self.checks.push(Check::Password);
        self
    }

    #[must_use]
    pub fn string_array(mut self) -> Self {
        self.checks.push(Check::StringArray);
        self
    }

    #[must_use]
    pub fn one_of(
        mut self,
        allowed: &'static [&'static str],
        message: impl Into<String>,
    ) -> Self {
        self.checks.push(Check::OneOf {
            allowed,
            message: message.into(),
        });
        self
    }

    fn evaluate(&self, body: &serde_json::Value, failures: &mut Vec<ValidationFailure>) {
        // JSON null counts as absent: there is no meaningful way to trim or
        // pattern-match it.
        let value = body.get(self.field).filter(|v| !v.is_null());
        let Some(value) = value else {
            if self.presence == Presence::Required {
                failures.push(ValidationFailure::new(
                    "required",
                    format!("{} is required", self.label),
                ));
            }
            return;
        };

        for check in &self.checks {
            match check {
                Check::StringArray => {
                    self.check_string_array(value, failures);
                    if !value.is_array() {
                        return;
                    }
                }
                Check::OneOf { allowed, message } => {
                    let Some(s) = value.as_str() else {
                        failures.push(self.type_failure());
                        return;
                    };
                    if !allowed.contains(&s) {
                        failures.push(ValidationFailure::new("enum", message.clone()));
                    }
                }
                other => {
                    let Some(s) = value.as_str() else {
                        failures.push(self.type_failure());
                        return;
                    };
                    self.check_string(other, s.trim(), failures);
                }
            }
        }
    }

    fn type_failure(&self) -> ValidationFailure {
        ValidationFailure::new("type", format!("{} must be a string", self.label))
    }

    fn check_string(&self, check: &Check, trimmed: &str, failures: &mut Vec<ValidationFailure>) {
        match check {
            Check::NonEmpty => {
                if trimmed.is_empty() {
                    failures.push(ValidationFailure::new(
                        "empty",
                        format!("{} cannot be empty", self.label),
                    ));
                }
            }
            Check::MaxLength(max) => {
                if trimmed.chars().count() > *max {
                    failures.push(ValidationFailure::new(
                        "length",
                        format!("{} can't exceed {max} characters", self.label),
                    ));
                }
            }
            Check::Pattern { regex, message } => {
                if !regex.is_match(trimmed) {
                    failures.push(ValidationFailure::new("pattern", message.clone()));
                }
            }
            Check::TextualDate => {
                if !rules::is_textual_date(trimmed) {
                    failures.push(ValidationFailure::new(
                        "date",
                        "Invalid date format".to_string(),
                    ));
                }
            }
            Check::Iso8601 => {
                if !is_iso8601(trimmed) {
                    failures.push(ValidationFailure::new(
                        "date",
                        format!("{} must be a valid ISO 8601 date", self.label),
                    ));
                }
            }
            Check::Email => {
                if !trimmed.validate_email() {
                    failures.push(ValidationFailure::new(
                        "email",
                        "Invalid email format".to_string(),
                    ));
                }
            }
            Check::Password => check_password(trimmed, failures),
            Check::StringArray | Check::OneOf { .. } => {}
        }
    }

    fn check_string_array(&self, value: &serde_json::Value, failures: &mut Vec<ValidationFailure>) {
        let Some(items) = value.as_array() else {
            failures.push(ValidationFailure::new(
                "array",
                "The field must be an array".to_string(),
            ));
            return;
        };
        if items.is_empty() {
            failures.push(ValidationFailure::new(
                "array",
                "Array cannot be empty".to_string(),
            ));
            return;
        }
        let all_strings = items
            .iter()
            .all(|item| item.as_str().is_some_and(|s| !s.trim().is_empty()));
        if !all_strings {
            failures.push(ValidationFailure::new(
                "array",
                "Each element in the array must be a non-empty string".to_string(),
            ));
        }
    }
}

fn check_password(password: &str, failures: &mut Vec<ValidationFailure>) {
    let length = password.chars().count();
    if !(6..=128).contains(&length) {
        failures.push(ValidationFailure::new(
            "password",
            "Password must be between 6 and 128 characters long".to_string(),
        ));
    }
    if password.chars().any(char::is_whitespace) {
        failures.push(ValidationFailure::new(
            "password",
            "Password must not contain spaces".to_string(),
        ));
    }
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    if !(has_upper && has_lower && has_digit && has_special) {
        failures.push(ValidationFailure::new(
            "password",
            "Password must contain at least one uppercase letter, one lowercase letter, \
             one number, and one special character"
                .to_string(),
        ));
    }
}

fn is_iso8601(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// An ordered set of field rules for one (resource, use case) pair
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<FieldRules>,
}

impl RuleSet {
    #[must_use]
    pub fn new(rules: Vec<FieldRules>) -> Self {
        Self { rules }
    }

    /// Run every rule and collect every failure, in declaration order
    #[must_use]
    pub fn evaluate(&self, body: &serde_json::Value) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        for rule in &self.rules {
            rule.evaluate(body, &mut failures);
        }
        failures
    }

    /// Pass control onward only when zero failures were collected
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PreconditionFailed` listing every failing rule.
    pub fn check(&self, body: &serde_json::Value) -> Result<(), ApiError> {
        let failures = self.evaluate(body);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(ApiError::PreconditionFailed(failures))
        }
    }
}
