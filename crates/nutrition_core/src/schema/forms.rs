//! Form schemas for newsletter, contact, booking and review payloads.

use super::reader::FieldReader;
use super::ValidationResult;
use crate::model::booking::NewBooking;
use crate::model::contact::NewContactMessage;
use crate::model::review::{NewReview, MAX_STARS, MIN_STARS};
use crate::model::subscriber::NewNewsletterSubscriber;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

/// Minimum contact message length, counted in characters.
pub const CONTACT_MESSAGE_MIN_CHARS: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_SLOT_FORMATS: &[&str] = &["%H:%M", "%I:%M %p", "%I:%M%p"];

/// Validates a newsletter signup (`firstName`, `lastName`, `email`, `consent`).
pub fn parse_newsletter(payload: &Value) -> ValidationResult<NewNewsletterSubscriber> {
    let mut reader = FieldReader::new(payload);
    let first_name = reader.required_text("firstName", "First name is required");
    let last_name = reader.required_text("lastName", "Last name is required");
    let email = reader.email("email");
    reader.consent("consent", "You must consent to receive emails");

    let input = match (first_name, last_name, email) {
        (Some(first_name), Some(last_name), Some(email)) => Some(NewNewsletterSubscriber {
            first_name,
            last_name,
            email,
        }),
        _ => None,
    };
    reader.finish(input)
}

/// Validates a contact form (`name`, `email`, `phone?`, `message`, `consent`).
pub fn parse_contact(payload: &Value) -> ValidationResult<NewContactMessage> {
    let mut reader = FieldReader::new(payload);
    let name = reader.required_text("name", "Full name is required");
    let email = reader.email("email");
    let phone = reader.optional_text("phone");
    let message = match reader.value("message") {
        Some(Value::String(raw)) if raw.trim().chars().count() >= CONTACT_MESSAGE_MIN_CHARS => {
            Some(raw.trim().to_string())
        }
        Some(Value::String(_)) | None if !reader.is_malformed() => {
            reader.reject("message", "Message must be at least 10 characters");
            None
        }
        Some(_) if !reader.is_malformed() => {
            reader.reject("message", "Expected string");
            None
        }
        _ => None,
    };
    reader.consent("consent", "You must consent to us storing your information");

    let input = match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Some(NewContactMessage {
            name,
            email,
            phone,
            message,
        }),
        _ => None,
    };
    reader.finish(input)
}

/// Validates a booking request (`date`, `timeSlot`, `service?`, `name`,
/// `email`, `phone?`).
///
/// The stored booking time is the UTC calendar day of `date` at `timeSlot`.
pub fn parse_booking(payload: &Value) -> ValidationResult<NewBooking> {
    let mut reader = FieldReader::new(payload);
    let day = match reader.value("date") {
        Some(value) => {
            let day = parse_day(value);
            if day.is_none() {
                reader.reject("date", "Invalid date");
            }
            day
        }
        None if !reader.is_malformed() => {
            reader.reject("date", "Please select a date");
            None
        }
        None => None,
    };
    let slot = match reader.required_text("timeSlot", "Please select a time slot") {
        Some(raw) => {
            let slot = parse_time_slot(&raw);
            if slot.is_none() {
                reader.reject("timeSlot", "Invalid time slot");
            }
            slot
        }
        None => None,
    };
    let service_type = reader.optional_text("service");
    let name = reader.required_text("name", "Name is required");
    let email = reader.email("email");
    let phone = reader.optional_text("phone");

    let input = match (day, slot, name, email) {
        (Some(day), Some(slot), Some(name), Some(email)) => Some(NewBooking {
            name,
            email,
            phone,
            date: day.and_time(slot).and_utc().timestamp_millis(),
            service_type,
        }),
        _ => None,
    };
    reader.finish(input)
}

/// Validates a testimonial (`initials`, `name`, `stars`, `quote`, `duration?`).
pub fn parse_review(payload: &Value) -> ValidationResult<NewReview> {
    let mut reader = FieldReader::new(payload);
    let initials = reader.required_text("initials", "Initials are required");
    let name = reader.required_text("name", "Name is required");
    let stars = match reader.value("stars").and_then(Value::as_i64) {
        Some(stars) if (MIN_STARS..=MAX_STARS).contains(&stars) => Some(stars),
        _ if reader.is_malformed() => None,
        _ => {
            reader.reject("stars", "Stars must be a whole number from 1 to 5");
            None
        }
    };
    let quote = reader.required_text("quote", "Quote is required");
    let duration = reader.optional_text("duration");

    let input = match (initials, name, stars, quote) {
        (Some(initials), Some(name), Some(stars), Some(quote)) => Some(NewReview {
            initials,
            name,
            stars,
            quote,
            duration,
        }),
        _ => None,
    };
    reader.finish(input)
}

fn parse_day(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(raw) => {
            let raw = raw.trim();
            DateTime::parse_from_rfc3339(raw)
                .map(|moment| moment.naive_utc().date())
                .ok()
                .or_else(|| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
        }
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|moment| moment.date_naive()),
        _ => None,
    }
}

fn parse_time_slot(raw: &str) -> Option<NaiveTime> {
    TIME_SLOT_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::{parse_booking, parse_contact, parse_newsletter, parse_review};
    use serde_json::json;

    #[test]
    fn newsletter_accepts_valid_payload_and_drops_consent() {
        let input = parse_newsletter(&json!({
            "firstName": " Ada ",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "consent": true
        }))
        .unwrap();
        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.last_name, "Lovelace");
        assert_eq!(input.email, "ada@example.com");
    }

    #[test]
    fn newsletter_reports_every_failing_field() {
        let err = parse_newsletter(&json!({
            "firstName": "",
            "email": "not-an-email",
            "consent": false
        }))
        .unwrap_err();
        assert_eq!(err.issues.len(), 4);
        assert_eq!(err.message_for("firstName"), Some("First name is required"));
        assert_eq!(err.message_for("lastName"), Some("Last name is required"));
        assert_eq!(err.message_for("email"), Some("Invalid email address"));
        assert_eq!(
            err.message_for("consent"),
            Some("You must consent to receive emails")
        );
    }

    #[test]
    fn consent_must_be_literal_true() {
        let err = parse_newsletter(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "consent": "true"
        }))
        .unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert!(err.has_field("consent"));
    }

    #[test]
    fn non_object_payload_yields_single_issue() {
        let err = parse_contact(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.message_for(""), Some("Expected object"));
    }

    #[test]
    fn contact_message_requires_ten_characters() {
        let err = parse_contact(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "message": "too short",
            "consent": true
        }))
        .unwrap_err();
        assert_eq!(
            err.message_for("message"),
            Some("Message must be at least 10 characters")
        );

        let ok = parse_contact(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "phone": "",
            "message": "ten chars!",
            "consent": true
        }))
        .unwrap();
        assert_eq!(ok.message, "ten chars!");
        assert_eq!(ok.phone, None);
    }

    #[test]
    fn contact_message_length_is_counted_after_trimming() {
        let err = parse_contact(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "message": "   short    ",
            "consent": true
        }))
        .unwrap_err();
        assert!(err.has_field("message"));

        let ok = parse_contact(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "message": "  Hello there  ",
            "consent": true
        }))
        .unwrap();
        assert_eq!(ok.message, "Hello there");
    }

    #[test]
    fn contact_counts_characters_not_bytes() {
        let err = parse_contact(&json!({
            "name": "Zoë",
            "email": "zoe@x.com",
            "message": "ééééééééé",
            "consent": true
        }))
        .unwrap_err();
        assert!(err.has_field("message"));
    }

    #[test]
    fn contact_rejects_wrongly_typed_phone() {
        let err = parse_contact(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "phone": 5551234,
            "message": "Hello there, I need help",
            "consent": true
        }))
        .unwrap_err();
        assert_eq!(err.message_for("phone"), Some("Expected string"));
    }

    #[test]
    fn booking_combines_day_and_time_slot() {
        let input = parse_booking(&json!({
            "date": "2026-03-02",
            "timeSlot": "2:30 PM",
            "service": "Initial consultation",
            "name": "Sam",
            "email": "sam@example.com"
        }))
        .unwrap();
        // 2026-03-02T14:30:00Z
        assert_eq!(input.date, 1_772_461_800_000);
        assert_eq!(input.service_type.as_deref(), Some("Initial consultation"));
        assert_eq!(input.phone, None);
    }

    #[test]
    fn booking_accepts_rfc3339_and_epoch_dates() {
        let from_rfc3339 = parse_booking(&json!({
            "date": "2026-03-02T09:00:00Z",
            "timeSlot": "14:30",
            "name": "Sam",
            "email": "sam@example.com"
        }))
        .unwrap();
        let from_epoch = parse_booking(&json!({
            "date": 1_772_442_000_000_i64,
            "timeSlot": "14:30",
            "name": "Sam",
            "email": "sam@example.com"
        }))
        .unwrap();
        assert_eq!(from_rfc3339.date, 1_772_461_800_000);
        assert_eq!(from_epoch.date, 1_772_461_800_000);
    }

    #[test]
    fn booking_requires_date_and_slot() {
        let err = parse_booking(&json!({
            "name": "Sam",
            "email": "sam@example.com"
        }))
        .unwrap_err();
        assert_eq!(err.message_for("date"), Some("Please select a date"));
        assert_eq!(err.message_for("timeSlot"), Some("Please select a time slot"));

        let err = parse_booking(&json!({
            "date": "next tuesday",
            "timeSlot": "lunchtime",
            "name": "Sam",
            "email": "sam@example.com"
        }))
        .unwrap_err();
        assert_eq!(err.message_for("date"), Some("Invalid date"));
        assert_eq!(err.message_for("timeSlot"), Some("Invalid time slot"));
    }

    #[test]
    fn review_enforces_star_range() {
        let err = parse_review(&json!({
            "initials": "AB",
            "name": "A B",
            "stars": 6,
            "quote": "Great!"
        }))
        .unwrap_err();
        assert!(err.has_field("stars"));

        let err = parse_review(&json!({
            "initials": "AB",
            "name": "A B",
            "stars": 4.5,
            "quote": "Great!"
        }))
        .unwrap_err();
        assert!(err.has_field("stars"));

        let review = parse_review(&json!({
            "initials": "AB",
            "name": "A B",
            "stars": 5,
            "quote": "Great!"
        }))
        .unwrap();
        assert_eq!(review.stars, 5);
        assert_eq!(review.duration, None);
    }
}
