//! Testimonial review model.
//!
//! # Invariants
//! - Reviews are created unapproved.
//! - Approval is one-way; nothing clears `is_approved`.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Lowest accepted star rating.
pub const MIN_STARS: i64 = 1;
/// Highest accepted star rating.
pub const MAX_STARS: i64 = 5;

/// Creation input for a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub initials: String,
    pub name: String,
    pub stars: i64,
    pub quote: String,
    /// Free text such as "Client for 8 months".
    pub duration: Option<String>,
}

/// Stored review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: RecordId,
    pub initials: String,
    pub name: String,
    pub stars: i64,
    pub quote: String,
    pub duration: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub is_approved: bool,
}

impl Review {
    pub(crate) fn from_input(id: RecordId, input: NewReview, created_at: i64) -> Self {
        Self {
            id,
            initials: input.initials,
            name: input.name,
            stars: input.stars,
            quote: input.quote,
            duration: input.duration,
            created_at,
            is_approved: false,
        }
    }

    /// Returns a copy marked approved.
    pub fn approved(&self) -> Self {
        Self {
            is_approved: true,
            ..self.clone()
        }
    }
}
