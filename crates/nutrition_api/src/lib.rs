//! Request-handling layer for the Generational Nutrition site.
//!
//! # Responsibility
//! - Expose the site's form endpoints as transport-agnostic handlers.
//! - Own attachment storage and request-layer configuration.
//!
//! # Invariants
//! - Storage is injected by the process entry point; there is no global store.
//! - Every request yields a response; handlers never panic.

pub mod config;
pub mod request;
pub mod routes;
pub mod uploads;

pub use config::ApiConfig;
pub use request::{ApiRequest, ApiResponse, Method};
pub use routes::Api;
pub use uploads::{Attachment, UploadError, UploadStore};
