//! Payload validation for site forms.
//!
//! # Responsibility
//! - Coerce untyped JSON payloads into typed creation inputs.
//! - Report every failing field in one aggregated `ValidationError`.
//!
//! # Invariants
//! - A payload either yields a complete input or an error; never both.
//! - Consent flags are checked here and never reach storage.
//! - String fields are trimmed; blank optional strings become `None`.

mod email;
mod forms;
mod reader;

pub use email::is_valid_email;
pub use forms::{
    parse_booking, parse_contact, parse_newsletter, parse_review, CONTACT_MESSAGE_MIN_CHARS,
};

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// One failing field and its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Payload key (camelCase); empty when the payload itself is malformed.
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Aggregated schema violation for one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue::new(field, message)],
        }
    }

    /// Returns whether any issue is reported for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// Returns the message reported for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Validation error: ")?;
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            if issue.field.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{} at \"{}\"", issue.message, issue.field)?;
            }
        }
        Ok(())
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{FieldIssue, ValidationError};

    #[test]
    fn display_lists_every_issue_with_field_path() {
        let error = ValidationError {
            issues: vec![
                FieldIssue::new("firstName", "First name is required"),
                FieldIssue::new("email", "Invalid email address"),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Validation error: First name is required at \"firstName\"; Invalid email address at \"email\""
        );
    }

    #[test]
    fn display_omits_path_for_payload_level_issue() {
        let error = ValidationError::single("", "Expected object");
        assert_eq!(error.to_string(), "Validation error: Expected object");
        assert!(error.has_field(""));
        assert_eq!(error.message_for(""), Some("Expected object"));
    }
}
