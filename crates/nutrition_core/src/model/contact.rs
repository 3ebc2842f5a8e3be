//! Contact message model.
//!
//! # Invariants
//! - `is_read` starts `false` and only ever flips to `true`.
//! - `document_urls` keeps upload order.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Creation input for a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Server-side paths of uploaded attachments, if any were sent.
    pub document_urls: Option<Vec<String>>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub is_read: bool,
}

impl ContactMessage {
    pub(crate) fn from_input(
        id: RecordId,
        input: NewContactMessage,
        document_urls: Option<Vec<String>>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            document_urls,
            created_at,
            is_read: false,
        }
    }

    /// Returns a copy with `is_read` set.
    pub fn marked_read(&self) -> Self {
        Self {
            is_read: true,
            ..self.clone()
        }
    }
}
