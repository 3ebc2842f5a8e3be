//! Newsletter subscriber model.
//!
//! # Invariants
//! - Subscribers are immutable after creation.
//! - Email comparison for uniqueness is case-insensitive (`email_matches`).

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Creation input for a newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsletterSubscriber {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Stored newsletter subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscriber {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl NewsletterSubscriber {
    pub(crate) fn from_input(id: RecordId, input: NewNewsletterSubscriber, created_at: i64) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            created_at,
        }
    }

    /// Returns whether `email` identifies this subscriber, ignoring case.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}
