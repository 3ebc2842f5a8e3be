//! In-memory storage engine.
//!
//! Each collection is an arena: records live in a `Vec` at index `id - 1`
//! next to the counter that hands out ids. One mutex per collection keeps id
//! assignment and read-modify-write updates serialized.

use super::{Storage, StorageError, StorageResult};
use crate::clock::{Clock, SystemClock};
use crate::model::booking::{Booking, NewBooking};
use crate::model::contact::{ContactMessage, NewContactMessage};
use crate::model::review::{NewReview, Review};
use crate::model::subscriber::{NewNewsletterSubscriber, NewsletterSubscriber};
use crate::model::{EntityKind, RecordId};
use log::{debug, info};
use std::sync::{Mutex, MutexGuard, PoisonError};

struct Collection<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.records.push(record.clone());
        record
    }

    fn index_of(&self, id: RecordId) -> Option<usize> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        (index < self.records.len()).then_some(index)
    }

    fn get(&self, id: RecordId) -> Option<&T> {
        self.index_of(id).map(|index| &self.records[index])
    }

    /// Replaces the record under `id` with `update(current)`.
    fn replace_with(&mut self, id: RecordId, update: impl FnOnce(&T) -> T) -> Option<T> {
        let index = self.index_of(id)?;
        let updated = update(&self.records[index]);
        self.records[index] = updated.clone();
        Some(updated)
    }
}

/// Process-lifetime storage for all site entities.
pub struct MemStorage {
    clock: Box<dyn Clock>,
    subscribers: Mutex<Collection<NewsletterSubscriber>>,
    contact_messages: Mutex<Collection<ContactMessage>>,
    bookings: Mutex<Collection<Booking>>,
    reviews: Mutex<Collection<Review>>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Creates empty storage stamped by wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates empty storage stamped by `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            subscribers: Mutex::new(Collection::new()),
            contact_messages: Mutex::new(Collection::new()),
            bookings: Mutex::new(Collection::new()),
            reviews: Mutex::new(Collection::new()),
        }
    }
}

impl Storage for MemStorage {
    fn create_newsletter_subscriber(
        &self,
        input: NewNewsletterSubscriber,
    ) -> StorageResult<NewsletterSubscriber> {
        let mut subscribers = lock(&self.subscribers);
        if subscribers
            .records
            .iter()
            .any(|existing| existing.email_matches(&input.email))
        {
            debug!("event=record_create module=storage status=conflict entity=newsletter_subscriber");
            return Err(StorageError::Conflict {
                entity: EntityKind::NewsletterSubscriber,
            });
        }

        let created_at = self.clock.now_ms();
        let subscriber = subscribers
            .insert_with(|id| NewsletterSubscriber::from_input(id, input, created_at));
        log_created(EntityKind::NewsletterSubscriber, subscriber.id);
        Ok(subscriber)
    }

    fn get_newsletter_subscriber_by_email(&self, email: &str) -> Option<NewsletterSubscriber> {
        lock(&self.subscribers)
            .records
            .iter()
            .find(|subscriber| subscriber.email_matches(email))
            .cloned()
    }

    fn get_all_newsletter_subscribers(&self) -> Vec<NewsletterSubscriber> {
        lock(&self.subscribers).records.clone()
    }

    fn create_contact_message(
        &self,
        input: NewContactMessage,
        document_urls: Option<Vec<String>>,
    ) -> ContactMessage {
        let message = {
            let mut messages = lock(&self.contact_messages);
            let created_at = self.clock.now_ms();
            messages
                .insert_with(|id| ContactMessage::from_input(id, input, document_urls, created_at))
        };
        log_created(EntityKind::ContactMessage, message.id);
        message
    }

    fn get_contact_message(&self, id: RecordId) -> Option<ContactMessage> {
        lock(&self.contact_messages).get(id).cloned()
    }

    fn get_all_contact_messages(&self) -> Vec<ContactMessage> {
        let mut messages = lock(&self.contact_messages).records.clone();
        sort_newest_first(&mut messages, |message| message.created_at);
        messages
    }

    fn mark_contact_message_as_read(&self, id: RecordId) -> StorageResult<ContactMessage> {
        lock(&self.contact_messages)
            .replace_with(id, ContactMessage::marked_read)
            .ok_or_else(|| not_found(EntityKind::ContactMessage, id))
    }

    fn create_booking(&self, input: NewBooking) -> Booking {
        let booking = {
            let mut bookings = lock(&self.bookings);
            let created_at = self.clock.now_ms();
            bookings.insert_with(|id| Booking::from_input(id, input, created_at))
        };
        log_created(EntityKind::Booking, booking.id);
        booking
    }

    fn get_booking(&self, id: RecordId) -> Option<Booking> {
        lock(&self.bookings).get(id).cloned()
    }

    fn get_all_bookings(&self) -> Vec<Booking> {
        let mut bookings = lock(&self.bookings).records.clone();
        sort_newest_first(&mut bookings, |booking| booking.created_at);
        bookings
    }

    fn update_booking_status(&self, id: RecordId, status: &str) -> StorageResult<Booking> {
        lock(&self.bookings)
            .replace_with(id, |booking| booking.with_status(status))
            .ok_or_else(|| not_found(EntityKind::Booking, id))
    }

    fn create_review(&self, input: NewReview) -> Review {
        let review = {
            let mut reviews = lock(&self.reviews);
            let created_at = self.clock.now_ms();
            reviews.insert_with(|id| Review::from_input(id, input, created_at))
        };
        log_created(EntityKind::Review, review.id);
        review
    }

    fn get_review(&self, id: RecordId) -> Option<Review> {
        lock(&self.reviews).get(id).cloned()
    }

    fn get_all_reviews(&self, approved_only: bool) -> Vec<Review> {
        let mut reviews: Vec<Review> = lock(&self.reviews)
            .records
            .iter()
            .filter(|review| !approved_only || review.is_approved)
            .cloned()
            .collect();
        sort_newest_first(&mut reviews, |review| review.created_at);
        reviews
    }

    fn approve_review(&self, id: RecordId) -> StorageResult<Review> {
        lock(&self.reviews)
            .replace_with(id, Review::approved)
            .ok_or_else(|| not_found(EntityKind::Review, id))
    }
}

/// Recovers from poisoning; writers never leave a collection half-updated.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Stable: records sharing a timestamp keep insertion order.
fn sort_newest_first<T>(records: &mut [T], created_at: impl Fn(&T) -> i64) {
    records.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}

fn not_found(entity: EntityKind, id: RecordId) -> StorageError {
    debug!(
        "event=record_lookup module=storage status=not_found entity={} id={}",
        entity, id
    );
    StorageError::NotFound { entity, id }
}

fn log_created(entity: EntityKind, id: RecordId) {
    info!(
        "event=record_created module=storage status=ok entity={} id={}",
        entity, id
    );
}
