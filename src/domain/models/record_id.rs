//! Record Identifier
//!
//! Newtype for the 24-character lowercase-hex identifiers used as primary
//! keys across all collections: a 4-byte creation timestamp followed by 8
//! random bytes, hex-encoded. The validation rules enforce the same
//! 24-alphanumeric shape on incoming identifier fields, so the two must stay
//! in sync.

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

/// Raised when a string does not have the 24-character alphanumeric shape
#[derive(Debug, Error)]
#[error("'{0}' is not a valid record id")]
pub struct InvalidRecordId(String);

/// Newtype wrapper for record identifiers providing type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new random RecordId
    #[must_use]
    pub fn new() -> Self {
        let mut bytes = [0u8; 12];
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seconds = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rand::thread_rng().fill(&mut bytes[4..]);
        Self(hex::encode(bytes))
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the underlying string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.len() == 24 && value.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Self(value.to_string()))
        } else {
            Err(InvalidRecordId(value.to_string()))
        }
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_24_hex_chars() {
        let id = RecordId::new();
        assert_eq!(id.as_str().len(), 24);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_try_from() {
        let id = RecordId::new();
        let parsed = RecordId::try_from(id.as_str()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(RecordId::try_from("too-short").is_err());
        assert!(RecordId::try_from("").is_err());
        assert!(RecordId::try_from("55532c284e8d64fbf0ea178f55").is_err());
        assert!(RecordId::try_from("55532c284e8d64fbf0ea178!").is_err());
    }

    #[test]
    fn accepts_mixed_case_alphanumerics() {
        assert!(RecordId::try_from("55532C284E8D64FBF0EA178F").is_ok());
    }
}
