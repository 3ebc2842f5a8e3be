//! Storage contracts for site submissions.
//!
//! # Responsibility
//! - Define the per-entity create/read/list/update contract (`Storage`).
//! - Report semantic failures (`NotFound`, `Conflict`) as values.
//!
//! # Invariants
//! - Ids are assigned per collection, starting at 1, strictly increasing.
//! - List calls recompute from current state; nothing is cached between calls.
//! - Storage performs no schema validation; callers validate first.
//! - No entity can be deleted.

mod memory;

pub use memory::MemStorage;

use crate::model::booking::{Booking, NewBooking};
use crate::model::contact::{ContactMessage, NewContactMessage};
use crate::model::review::{NewReview, Review};
use crate::model::subscriber::{NewNewsletterSubscriber, NewsletterSubscriber};
use crate::model::{EntityKind, RecordId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Semantic storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Referenced id is absent from its collection.
    NotFound { entity: EntityKind, id: RecordId },
    /// A subscriber with the same email (ignoring case) already exists.
    Conflict { entity: EntityKind },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Conflict { entity } => write!(f, "{entity} already exists"),
        }
    }
}

impl Error for StorageError {}

/// Storage contract for all site entities.
///
/// Implementations must be safe to share across request handlers: every call
/// is atomic from the caller's point of view.
pub trait Storage: Send + Sync {
    /// Stores a subscriber, rejecting a case-insensitive email duplicate.
    fn create_newsletter_subscriber(
        &self,
        input: NewNewsletterSubscriber,
    ) -> StorageResult<NewsletterSubscriber>;
    /// Case-insensitive email lookup.
    fn get_newsletter_subscriber_by_email(&self, email: &str) -> Option<NewsletterSubscriber>;
    /// All subscribers in insertion order.
    fn get_all_newsletter_subscribers(&self) -> Vec<NewsletterSubscriber>;

    /// Stores a contact message with optional attachment paths; starts unread.
    fn create_contact_message(
        &self,
        input: NewContactMessage,
        document_urls: Option<Vec<String>>,
    ) -> ContactMessage;
    fn get_contact_message(&self, id: RecordId) -> Option<ContactMessage>;
    /// All contact messages, newest first.
    fn get_all_contact_messages(&self) -> Vec<ContactMessage>;
    /// Sets `is_read`; idempotent.
    fn mark_contact_message_as_read(&self, id: RecordId) -> StorageResult<ContactMessage>;

    /// Stores a booking with status `pending`.
    fn create_booking(&self, input: NewBooking) -> Booking;
    fn get_booking(&self, id: RecordId) -> Option<Booking>;
    /// All bookings, newest first.
    fn get_all_bookings(&self) -> Vec<Booking>;
    /// Replaces the free-form status string.
    fn update_booking_status(&self, id: RecordId, status: &str) -> StorageResult<Booking>;

    /// Stores an unapproved review.
    fn create_review(&self, input: NewReview) -> Review;
    fn get_review(&self, id: RecordId) -> Option<Review>;
    /// Reviews newest first; `approved_only` filters to approved ones.
    fn get_all_reviews(&self, approved_only: bool) -> Vec<Review>;
    /// Sets `is_approved`; idempotent and one-way.
    fn approve_review(&self, id: RecordId) -> StorageResult<Review>;
}
