//! Core domain logic for the Generational Nutrition site backend.
//! This crate is the single source of truth for submission invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod schema;
pub mod seed;
pub mod service;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::booking::{Booking, NewBooking, DEFAULT_BOOKING_STATUS};
pub use model::contact::{ContactMessage, NewContactMessage};
pub use model::review::{NewReview, Review};
pub use model::subscriber::{NewNewsletterSubscriber, NewsletterSubscriber};
pub use model::{EntityKind, RecordId};
pub use schema::{FieldIssue, ValidationError, ValidationResult};
pub use seed::seed_testimonials;
pub use service::submission_service::{ServiceError, ServiceResult, SubmissionService};
pub use storage::{MemStorage, Storage, StorageError, StorageResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
