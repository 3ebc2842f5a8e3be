//! Domain records for site submissions.
//!
//! # Responsibility
//! - Define the creation-input shape (`NewX`) and the stored record shape (`X`)
//!   for every entity kind as separate types.
//!
//! # Invariants
//! - Server-managed fields (`id`, `created_at`, `is_read`, `is_approved`,
//!   `status`) never appear on creation inputs.
//! - Records serialize with camelCase keys to match the site frontend.

pub mod booking;
pub mod contact;
pub mod review;
pub mod subscriber;

/// Per-collection sequential identifier, starting at 1.
pub type RecordId = i64;

/// Entity kinds owned by the storage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    NewsletterSubscriber,
    ContactMessage,
    Booking,
    Review,
}

impl EntityKind {
    /// Stable snake_case label used in logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::NewsletterSubscriber => "newsletter_subscriber",
            Self::ContactMessage => "contact_message",
            Self::Booking => "booking",
            Self::Review => "review",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
