//! Per-Resource Validation Rules
//!
//! The rule sets evaluated in front of each CRUD handler. Identifier fields
//! must match the storage layer's 24-character alphanumeric id format; date
//! fields accept four textual formats; unknown fields are ignored.

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::errors::{ApiError, ValidationFailure};

use super::{FieldRules, RuleSet, UseCase};

lazy_static! {
    /// The storage layer's identifier format
    static ref RECORD_ID_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9]{24}$").expect("valid regex");

    /// Provider-issued account ids
    static ref GOOGLE_ID_REGEX: Regex =
        Regex::new(r"^[0-9a-zA-Z]{1,255}$").expect("valid regex");

    /// Dec 12, 2024
    static ref DATE_MONTH_ABBREV_REGEX: Regex = Regex::new(
        r"^(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s\d{1,2},\s\d{2,4}\b"
    )
    .expect("valid regex");

    /// December 12, 2024
    static ref DATE_MONTH_FULL_REGEX: Regex = Regex::new(
        r"^(?:January|February|March|April|May|June|July|August|September|October|November|December)\s\d{1,2},\s\d{2,4}\b"
    )
    .expect("valid regex");

    /// 12/12/2024 or 12-12-2024
    static ref DATE_NUMERIC_REGEX: Regex =
        Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}$").expect("valid regex");

    /// 12/12/24 or 12-12-24
    static ref DATE_NUMERIC_SHORT_REGEX: Regex =
        Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2}$").expect("valid regex");
}

/// Whether the value matches one of the four accepted date formats
#[must_use]
pub fn is_textual_date(value: &str) -> bool {
    DATE_MONTH_ABBREV_REGEX.is_match(value)
        || DATE_MONTH_FULL_REGEX.is_match(value)
        || DATE_NUMERIC_REGEX.is_match(value)
        || DATE_NUMERIC_SHORT_REGEX.is_match(value)
}

/// The shared trim / non-empty / max-length chain for a text field:
/// required on create, optional on update.
fn text_field(field: &'static str, use_case: UseCase, max: usize) -> FieldRules {
    branch(field, use_case).non_empty().max_length(max)
}

/// Identifier reference: required on create, optional on update, always
/// pattern-checked when present.
fn id_field(field: &'static str, use_case: UseCase) -> FieldRules {
    branch(field, use_case).pattern(
        &RECORD_ID_REGEX,
        format!("Your {field} was not a valid record ID"),
    )
}

/// Date in one of the accepted textual formats: required on create,
/// optional on update.
fn date_field(field: &'static str, use_case: UseCase) -> FieldRules {
    branch(field, use_case).labeled("Date").textual_date()
}

fn branch(field: &'static str, use_case: UseCase) -> FieldRules {
    match use_case {
        UseCase::Create => FieldRules::required(field),
        UseCase::Update => FieldRules::optional(field),
    }
}

/// Rules for the user resource
#[must_use]
pub fn user_rules(use_case: UseCase) -> RuleSet {
    RuleSet::new(vec![
        FieldRules::optional("googleId").pattern(
            &GOOGLE_ID_REGEX,
            "Google ID must be alphanumeric and between 1 and 255 characters",
        ),
        text_field("name", use_case, 100),
        branch("email", use_case).non_empty().email(),
        FieldRules::optional("password").password(),
    ])
}

/// Rules for the celebration resource
#[must_use]
pub fn celebration_rules(use_case: UseCase) -> RuleSet {
    RuleSet::new(vec![
        text_field("person", use_case, 200),
        text_field("occasion", use_case, 100),
        text_field("plan", use_case, 512),
        FieldRules::optional("location").non_empty().max_length(200),
        id_field("user", use_case),
        date_field("date", use_case),
        FieldRules::optional("othersInvolved").string_array(),
        FieldRules::optional("visibility").one_of(
            &["Private", "Public"],
            "Visibility must be either \"Private\" or \"Public\"",
        ),
    ])
}

/// Rules for the goal resource
#[must_use]
pub fn goal_rules(use_case: UseCase) -> RuleSet {
    RuleSet::new(vec![
        text_field("name", use_case, 100),
        text_field("description", use_case, 1000),
        date_field("dueDate", use_case),
        id_field("userId", use_case),
    ])
}

/// Rules for the event resource. The same rules apply to create and update.
#[must_use]
pub fn event_rules() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::required("name").non_empty(),
        FieldRules::required("description").non_empty(),
        FieldRules::required("date").iso8601(),
        FieldRules::required("location").non_empty(),
        FieldRules::required("userId").pattern(
            &RECORD_ID_REGEX,
            "Your userId was not a valid record ID",
        ),
    ])
}

/// Rules for the class resource. The same rules apply to create and update.
#[must_use]
pub fn class_rules() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::required("startTime")
            .labeled("Start time")
            .iso8601(),
        FieldRules::required("userId").pattern(
            &RECORD_ID_REGEX,
            "Your class doesn't belong to a real user. Find the right User ID",
        ),
    ])
}

/// Validate a path parameter that must be a record id
///
/// # Errors
///
/// Returns `ApiError::PreconditionFailed` when the parameter does not match
/// the 24-character alphanumeric id format.
pub fn check_id_param(name: &str, value: &str) -> Result<(), ApiError> {
    if RECORD_ID_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ApiError::PreconditionFailed(vec![ValidationFailure::new(
            "pattern",
            format!("Your {name} was not a valid record ID"),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(failures: &[ValidationFailure]) -> Vec<String> {
        failures.iter().map(|f| f.message.clone()).collect()
    }

    fn valid_celebration_body() -> serde_json::Value {
        json!({
            "person": "Grandma",
            "occasion": "80th birthday",
            "plan": "Surprise dinner",
            "user": "55532c284e8d64fbf0ea178f",
            "date": "Dec 12, 2026",
        })
    }

    #[test]
    fn all_four_date_formats_are_accepted() {
        for date in [
            "Dec 12, 2024",
            "December 12, 2024",
            "12/12/2024",
            "12-12-2024",
            "12/12/24",
            "12-12-24",
        ] {
            assert!(is_textual_date(date), "{date}");
        }
    }

    #[test]
    fn non_matching_dates_are_rejected() {
        for date in ["Not/Valid/Date", "2024-12-12", "12th of December", ""] {
            assert!(!is_textual_date(date), "{date}");
        }
    }

    #[test]
    fn create_celebration_with_valid_body_passes() {
        assert!(celebration_rules(UseCase::Create)
            .evaluate(&valid_celebration_body())
            .is_empty());
    }

    #[test]
    fn create_celebration_reports_every_missing_field() {
        let failures = celebration_rules(UseCase::Create).evaluate(&json!({}));
        assert_eq!(
            messages(&failures),
            vec![
                "Person is required",
                "Occasion is required",
                "Plan is required",
                "User is required",
                "Date is required",
            ]
        );
    }

    #[test]
    fn update_celebration_accepts_an_empty_body() {
        assert!(celebration_rules(UseCase::Update).evaluate(&json!({})).is_empty());
    }

    #[test]
    fn update_celebration_still_rejects_blank_fields() {
        let failures = celebration_rules(UseCase::Update).evaluate(&json!({ "person": " " }));
        assert_eq!(messages(&failures), vec!["Person cannot be empty"]);
    }

    #[test]
    fn celebration_rejects_wrong_visibility() {
        let mut body = valid_celebration_body();
        body["visibility"] = json!("Wrong");
        let failures = celebration_rules(UseCase::Create).evaluate(&body);
        assert_eq!(
            messages(&failures),
            vec!["Visibility must be either \"Private\" or \"Public\""]
        );
    }

    #[test]
    fn celebration_rejects_non_array_others_involved() {
        let mut body = valid_celebration_body();
        body["othersInvolved"] = json!("not-an-array");
        let failures = celebration_rules(UseCase::Create).evaluate(&body);
        assert_eq!(messages(&failures), vec!["The field must be an array"]);
    }

    #[test]
    fn id_fields_reject_non_record_ids_in_both_branches() {
        for use_case in [UseCase::Create, UseCase::Update] {
            let failures =
                celebration_rules(use_case).evaluate(&json!({ "user": "not-a-record-id" }));
            assert!(
                failures
                    .iter()
                    .any(|f| f.message == "Your user was not a valid record ID"),
                "{use_case:?}"
            );
        }
    }

    #[test]
    fn goal_rules_follow_the_create_update_split() {
        let create = goal_rules(UseCase::Create).evaluate(&json!({}));
        assert_eq!(create.len(), 4);

        let update = goal_rules(UseCase::Update).evaluate(&json!({}));
        assert!(update.is_empty());

        let bad_due_date = goal_rules(UseCase::Update)
            .evaluate(&json!({ "dueDate": "Not/Valid/Date" }));
        assert_eq!(messages(&bad_due_date), vec!["Invalid date format"]);
    }

    #[test]
    fn event_rules_require_everything_every_time() {
        let failures = event_rules().evaluate(&json!({
            "name": "Standup",
            "description": "Daily sync",
            "date": "13/01/2026",
            "location": "Office",
            "userId": "55532c284e8d64fbf0ea178f",
        }));
        assert_eq!(messages(&failures), vec!["Date must be a valid ISO 8601 date"]);
    }

    #[test]
    fn class_rules_check_start_time_and_owner() {
        let failures = class_rules().evaluate(&json!({
            "startTime": "whenever",
            "userId": "nope",
        }));
        assert_eq!(
            messages(&failures),
            vec![
                "Start time must be a valid ISO 8601 date",
                "Your class doesn't belong to a real user. Find the right User ID",
            ]
        );
    }

    #[test]
    fn user_rules_validate_email_and_password() {
        let failures = user_rules(UseCase::Create).evaluate(&json!({
            "name": "Ada",
            "email": "not-an-email",
            "password": "weak",
        }));
        let msgs = messages(&failures);
        assert!(msgs.contains(&"Invalid email format".to_string()));
        assert!(msgs
            .iter()
            .any(|m| m.starts_with("Password must be between 6 and 128")));
    }

    #[test]
    fn same_body_evaluates_identically_twice() {
        let body = json!({
            "person": "",
            "occasion": 5,
            "date": "Not/Valid/Date",
        });
        let rules = celebration_rules(UseCase::Create);
        let first = messages(&rules.evaluate(&body));
        let second = messages(&rules.evaluate(&body));
        assert_eq!(first, second);
    }

    #[test]
    fn id_param_check_accepts_only_record_ids() {
        assert!(check_id_param("celebrationId", "55532c284e8d64fbf0ea178f").is_ok());
        assert!(check_id_param("celebrationId", "123").is_err());
    }
}
