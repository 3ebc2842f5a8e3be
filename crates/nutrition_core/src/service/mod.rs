//! Core use-case services.
//!
//! # Responsibility
//! - Combine payload validation and storage calls into form-level use cases.
//! - Keep request-handling layers decoupled from storage details.

pub mod submission_service;
