//! Form submission use-case service.
//!
//! # Responsibility
//! - Validate untyped payloads before any storage write.
//! - Turn storage outcomes into use-case errors (`Conflict`, `NotFound`).
//!
//! # Invariants
//! - A payload that fails validation never reaches storage.
//! - Duplicate newsletter emails (ignoring case) are rejected as `Conflict`.
//! - Service APIs never bypass the storage mutation operations.

use crate::model::booking::Booking;
use crate::model::contact::ContactMessage;
use crate::model::review::Review;
use crate::model::subscriber::NewsletterSubscriber;
use crate::model::{EntityKind, RecordId};
use crate::schema::{self, ValidationError};
use crate::storage::{Storage, StorageError};
use log::info;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Payload failed schema checks; carries every failing field.
    Validation(ValidationError),
    /// Unique field already taken.
    Conflict(EntityKind),
    /// Referenced record does not exist.
    NotFound { entity: EntityKind, id: RecordId },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict(entity) => write!(f, "{entity} already exists"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NotFound { entity, id } => Self::NotFound { entity, id },
            StorageError::Conflict { entity } => Self::Conflict(entity),
        }
    }
}

/// Submission service facade over a storage implementation.
pub struct SubmissionService<S: Storage> {
    storage: S,
}

impl<S: Storage> SubmissionService<S> {
    /// Creates a service over the provided storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read access for callers that need direct queries.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Subscribes to the newsletter.
    ///
    /// # Contract
    /// - Validates `firstName`, `lastName`, `email` and `consent`.
    /// - Returns `Conflict` when the email is already subscribed (any case).
    pub fn subscribe(&self, payload: &Value) -> ServiceResult<NewsletterSubscriber> {
        let input = schema::parse_newsletter(payload)?;
        if self
            .storage
            .get_newsletter_subscriber_by_email(&input.email)
            .is_some()
        {
            info!("event=subscribe module=service status=conflict");
            return Err(ServiceError::Conflict(EntityKind::NewsletterSubscriber));
        }
        Ok(self.storage.create_newsletter_subscriber(input)?)
    }

    /// Stores a contact message together with already-stored attachment paths.
    pub fn submit_contact(
        &self,
        payload: &Value,
        document_urls: Option<Vec<String>>,
    ) -> ServiceResult<ContactMessage> {
        let input = schema::parse_contact(payload)?;
        Ok(self.storage.create_contact_message(input, document_urls))
    }

    /// Validates a payload as a contact form without storing anything.
    ///
    /// Lets callers reject bad input before doing upload work.
    pub fn check_contact(&self, payload: &Value) -> ServiceResult<()> {
        schema::parse_contact(payload)?;
        Ok(())
    }

    /// Records a consultation booking request with status `pending`.
    pub fn request_booking(&self, payload: &Value) -> ServiceResult<Booking> {
        let input = schema::parse_booking(payload)?;
        Ok(self.storage.create_booking(input))
    }

    /// Records a testimonial awaiting approval.
    pub fn submit_review(&self, payload: &Value) -> ServiceResult<Review> {
        let input = schema::parse_review(payload)?;
        Ok(self.storage.create_review(input))
    }

    /// Approved testimonials, newest first.
    pub fn approved_reviews(&self) -> Vec<Review> {
        self.storage.get_all_reviews(true)
    }

    pub fn all_subscribers(&self) -> Vec<NewsletterSubscriber> {
        self.storage.get_all_newsletter_subscribers()
    }

    pub fn all_contact_messages(&self) -> Vec<ContactMessage> {
        self.storage.get_all_contact_messages()
    }

    pub fn all_bookings(&self) -> Vec<Booking> {
        self.storage.get_all_bookings()
    }

    pub fn mark_contact_message_read(&self, id: RecordId) -> ServiceResult<ContactMessage> {
        Ok(self.storage.mark_contact_message_as_read(id)?)
    }

    pub fn approve_review(&self, id: RecordId) -> ServiceResult<Review> {
        let review = self.storage.approve_review(id)?;
        info!("event=review_approved module=service status=ok id={}", review.id);
        Ok(review)
    }

    /// Replaces a booking status.
    ///
    /// Status text is trimmed and must not be blank; otherwise any value is
    /// accepted.
    pub fn update_booking_status(&self, id: RecordId, status: &str) -> ServiceResult<Booking> {
        let status = status.trim();
        if status.is_empty() {
            return Err(ValidationError::single("status", "Status is required").into());
        }
        let booking = self.storage.update_booking_status(id, status)?;
        info!(
            "event=booking_status_updated module=service status=ok id={}",
            booking.id
        );
        Ok(booking)
    }
}
