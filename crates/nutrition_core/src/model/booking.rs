//! Consultation booking model.
//!
//! # Invariants
//! - New bookings start with status `pending`.
//! - Status is free-form text; only `update_booking_status` replaces it.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Status assigned to every new booking.
pub const DEFAULT_BOOKING_STATUS: &str = "pending";

/// Creation input for a consultation booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Requested slot start, Unix epoch milliseconds.
    pub date: i64,
    pub service_type: Option<String>,
}

/// Stored consultation booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: i64,
    pub service_type: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub status: String,
}

impl Booking {
    pub(crate) fn from_input(id: RecordId, input: NewBooking, created_at: i64) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            date: input.date,
            service_type: input.service_type,
            created_at,
            status: DEFAULT_BOOKING_STATUS.to_string(),
        }
    }

    /// Returns a copy carrying `status`.
    pub fn with_status(&self, status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..self.clone()
        }
    }
}
