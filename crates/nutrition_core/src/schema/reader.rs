//! Field extraction over a JSON object that records issues as it goes.

use super::{is_valid_email, FieldIssue, ValidationError, ValidationResult};
use serde_json::{Map, Value};

const EXPECTED_OBJECT: &str = "Expected object";
const EXPECTED_STRING: &str = "Expected string";
const INVALID_EMAIL: &str = "Invalid email address";

pub(super) struct FieldReader<'a> {
    object: Option<&'a Map<String, Value>>,
    issues: Vec<FieldIssue>,
}

impl<'a> FieldReader<'a> {
    pub(super) fn new(payload: &'a Value) -> Self {
        match payload.as_object() {
            Some(object) => Self {
                object: Some(object),
                issues: Vec::new(),
            },
            None => Self {
                object: None,
                issues: vec![FieldIssue::new("", EXPECTED_OBJECT)],
            },
        }
    }

    /// Raw value for `field`; `null` is reported as absent.
    pub(super) fn value(&self, field: &str) -> Option<&'a Value> {
        self.object
            .and_then(|object| object.get(field))
            .filter(|value| !value.is_null())
    }

    pub(super) fn is_malformed(&self) -> bool {
        self.object.is_none()
    }

    pub(super) fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue::new(field, message));
    }

    /// Trimmed non-empty string, or `missing_message`.
    pub(super) fn required_text(&mut self, field: &str, missing_message: &str) -> Option<String> {
        if self.is_malformed() {
            return None;
        }
        match self.value(field) {
            Some(Value::String(raw)) if !raw.trim().is_empty() => Some(raw.trim().to_string()),
            Some(Value::String(_)) | None => {
                self.reject(field, missing_message);
                None
            }
            Some(_) => {
                self.reject(field, EXPECTED_STRING);
                None
            }
        }
    }

    /// Trimmed string when present and non-blank.
    pub(super) fn optional_text(&mut self, field: &str) -> Option<String> {
        match self.value(field) {
            Some(Value::String(raw)) if !raw.trim().is_empty() => Some(raw.trim().to_string()),
            Some(Value::String(_)) | None => None,
            Some(_) => {
                self.reject(field, EXPECTED_STRING);
                None
            }
        }
    }

    pub(super) fn email(&mut self, field: &str) -> Option<String> {
        if self.is_malformed() {
            return None;
        }
        match self.value(field) {
            Some(Value::String(raw)) if is_valid_email(raw.trim()) => Some(raw.trim().to_string()),
            Some(Value::String(_)) | None => {
                self.reject(field, INVALID_EMAIL);
                None
            }
            Some(_) => {
                self.reject(field, EXPECTED_STRING);
                None
            }
        }
    }

    /// Requires the literal boolean `true`.
    pub(super) fn consent(&mut self, field: &str, message: &str) {
        if self.is_malformed() {
            return;
        }
        if self.value(field) != Some(&Value::Bool(true)) {
            self.reject(field, message);
        }
    }

    /// Closes the reader: any recorded issue wins over a built value.
    pub(super) fn finish<T>(self, value: Option<T>) -> ValidationResult<T> {
        if !self.issues.is_empty() {
            return Err(ValidationError {
                issues: self.issues,
            });
        }
        value.ok_or_else(|| ValidationError::single("", EXPECTED_OBJECT))
    }
}
