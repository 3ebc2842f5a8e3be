use nutrition_core::{
    seed_testimonials, EntityKind, ManualClock, MemStorage, NewBooking, NewContactMessage,
    NewNewsletterSubscriber, NewReview, Storage, StorageError, DEFAULT_BOOKING_STATUS,
};

fn subscriber(email: &str) -> NewNewsletterSubscriber {
    NewNewsletterSubscriber {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
    }
}

fn contact(name: &str) -> NewContactMessage {
    NewContactMessage {
        name: name.to_string(),
        email: "jo@x.com".to_string(),
        phone: None,
        message: "Hello there, I need help".to_string(),
    }
}

fn booking(name: &str) -> NewBooking {
    NewBooking {
        name: name.to_string(),
        email: "sam@example.com".to_string(),
        phone: Some("555-0100".to_string()),
        date: 1_772_461_800_000,
        service_type: None,
    }
}

fn review(initials: &str) -> NewReview {
    NewReview {
        initials: initials.to_string(),
        name: "A B".to_string(),
        stars: 5,
        quote: "Great!".to_string(),
        duration: None,
    }
}

#[test]
fn ids_start_at_one_and_increase_per_collection() {
    let storage = MemStorage::new();

    let reviews: Vec<_> = (0..4).map(|_| storage.create_review(review("AB"))).collect();
    let messages: Vec<_> = (0..2)
        .map(|_| storage.create_contact_message(contact("Jo"), None))
        .collect();
    let bookings: Vec<_> = (0..3).map(|_| storage.create_booking(booking("Sam"))).collect();
    let subscribed = storage
        .create_newsletter_subscriber(subscriber("ada@example.com"))
        .unwrap();

    assert_eq!(
        reviews.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(messages.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(bookings.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(subscribed.id, 1);
}

#[test]
fn create_applies_server_defaults() {
    let clock = ManualClock::at_ms(5_000);
    let storage = MemStorage::with_clock(clock.clone());

    let message = storage.create_contact_message(
        contact("Jo"),
        Some(vec!["uploads/a.pdf".to_string(), "uploads/b.png".to_string()]),
    );
    assert!(!message.is_read);
    assert_eq!(message.created_at, 5_000);
    assert_eq!(
        message.document_urls,
        Some(vec!["uploads/a.pdf".to_string(), "uploads/b.png".to_string()])
    );

    let created = storage.create_booking(booking("Sam"));
    assert_eq!(created.status, DEFAULT_BOOKING_STATUS);
    assert_eq!(created.status, "pending");

    let unapproved = storage.create_review(review("AB"));
    assert!(!unapproved.is_approved);
}

#[test]
fn contact_message_end_to_end_mark_as_read() {
    let storage = MemStorage::new();
    let created = storage.create_contact_message(contact("Jo"), None);
    assert_eq!(created.id, 1);
    assert!(!created.is_read);
    assert_eq!(created.document_urls, None);

    let read = storage.mark_contact_message_as_read(1).unwrap();
    assert!(read.is_read);
    assert_eq!(read.id, 1);
    assert_eq!(read.created_at, created.created_at);
    assert_eq!(read.message, created.message);

    let again = storage.mark_contact_message_as_read(1).unwrap();
    assert_eq!(again, read);
    assert_eq!(storage.get_contact_message(1), Some(read));
}

#[test]
fn mark_as_read_on_missing_id_reports_not_found_without_side_effects() {
    let storage = MemStorage::new();
    let existing = storage.create_contact_message(contact("Jo"), None);

    let err = storage.mark_contact_message_as_read(99).unwrap_err();
    assert_eq!(
        err,
        StorageError::NotFound {
            entity: EntityKind::ContactMessage,
            id: 99
        }
    );
    assert_eq!(err.to_string(), "contact_message not found: 99");
    assert_eq!(storage.get_contact_message(existing.id), Some(existing));
    assert_eq!(storage.get_all_contact_messages().len(), 1);
}

#[test]
fn review_end_to_end_approval() {
    let storage = MemStorage::new();
    let created = storage.create_review(review("AB"));
    assert!(!created.is_approved);
    assert!(storage.get_all_reviews(true).is_empty());

    let approved = storage.approve_review(created.id).unwrap();
    assert!(approved.is_approved);

    let visible = storage.get_all_reviews(true);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, created.id);
}

#[test]
fn approve_review_is_idempotent() {
    let storage = MemStorage::new();
    let created = storage.create_review(review("AB"));

    let first = storage.approve_review(created.id).unwrap();
    let second = storage.approve_review(created.id).unwrap();

    assert_eq!(first, second);
    assert!(second.is_approved);
    assert_eq!(second.id, created.id);
    assert_eq!(second.created_at, created.created_at);
    assert_eq!(second.quote, created.quote);
    assert_eq!(second.stars, created.stars);
}

#[test]
fn approved_only_filter_excludes_unapproved_reviews() {
    let storage = MemStorage::new();
    let keep = storage.create_review(review("AA"));
    storage.create_review(review("BB"));
    storage.approve_review(keep.id).unwrap();

    let approved = storage.get_all_reviews(true);
    assert!(approved.iter().all(|r| r.is_approved));
    assert_eq!(approved.len(), 1);

    let all = storage.get_all_reviews(false);
    assert_eq!(all.len(), 2);
}

#[test]
fn duplicate_subscriber_email_is_a_conflict_regardless_of_case() {
    let storage = MemStorage::new();
    storage
        .create_newsletter_subscriber(subscriber("A@x.com"))
        .unwrap();

    let err = storage
        .create_newsletter_subscriber(subscriber("a@x.com"))
        .unwrap_err();
    assert_eq!(
        err,
        StorageError::Conflict {
            entity: EntityKind::NewsletterSubscriber
        }
    );
    assert_eq!(storage.get_all_newsletter_subscribers().len(), 1);

    let found = storage
        .get_newsletter_subscriber_by_email("A@X.COM")
        .unwrap();
    assert_eq!(found.email, "A@x.com");
    assert!(storage
        .get_newsletter_subscriber_by_email("b@x.com")
        .is_none());
}

#[test]
fn subscribers_list_in_insertion_order() {
    let clock = ManualClock::at_ms(10_000);
    let storage = MemStorage::with_clock(clock.clone());

    storage
        .create_newsletter_subscriber(subscriber("first@x.com"))
        .unwrap();
    clock.set_ms(1_000);
    storage
        .create_newsletter_subscriber(subscriber("second@x.com"))
        .unwrap();

    let emails: Vec<_> = storage
        .get_all_newsletter_subscribers()
        .into_iter()
        .map(|s| s.email)
        .collect();
    assert_eq!(emails, vec!["first@x.com", "second@x.com"]);
}

#[test]
fn contact_messages_and_bookings_list_newest_first() {
    let clock = ManualClock::at_ms(1_000);
    let storage = MemStorage::with_clock(clock.clone());

    for name in ["t1", "t2", "t3"] {
        storage.create_contact_message(contact(name), None);
        storage.create_booking(booking(name));
        clock.advance_ms(1_000);
    }

    let messages: Vec<_> = storage
        .get_all_contact_messages()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(messages, vec!["t3", "t2", "t1"]);

    let bookings = storage.get_all_bookings();
    let names: Vec<_> = bookings.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["t3", "t2", "t1"]);
    assert!(bookings
        .windows(2)
        .all(|pair| pair[0].created_at > pair[1].created_at));
}

#[test]
fn same_timestamp_records_keep_insertion_order() {
    let clock = ManualClock::at_ms(7);
    let storage = MemStorage::with_clock(clock.clone());
    storage.create_review(review("AA"));
    storage.create_review(review("BB"));
    clock.advance_ms(1);
    storage.create_review(review("CC"));
    storage.create_review(review("DD"));

    let initials: Vec<_> = storage
        .get_all_reviews(false)
        .into_iter()
        .map(|r| r.initials)
        .collect();
    assert_eq!(initials, vec!["CC", "DD", "AA", "BB"]);
}

#[test]
fn seeded_testimonials_list_in_seed_order() {
    let storage = MemStorage::with_clock(ManualClock::at_ms(1_000));
    seed_testimonials(&storage);

    let initials: Vec<_> = storage
        .get_all_reviews(true)
        .into_iter()
        .map(|r| r.initials)
        .collect();
    assert_eq!(initials, vec!["JD", "RS", "MT"]);
}

#[test]
fn list_results_are_fresh_snapshots() {
    let storage = MemStorage::new();
    let before = storage.get_all_bookings();
    storage.create_booking(booking("Sam"));
    let after = storage.get_all_bookings();

    assert!(before.is_empty());
    assert_eq!(after.len(), 1);
}

#[test]
fn update_booking_status_replaces_only_status() {
    let storage = MemStorage::new();
    let created = storage.create_booking(booking("Sam"));

    let confirmed = storage.update_booking_status(created.id, "confirmed").unwrap();
    assert_eq!(confirmed.status, "confirmed");
    assert_eq!(confirmed.created_at, created.created_at);
    assert_eq!(confirmed.date, created.date);
    assert_eq!(confirmed.name, created.name);
    assert_eq!(storage.get_booking(created.id), Some(confirmed));

    let err = storage.update_booking_status(42, "confirmed").unwrap_err();
    assert!(matches!(
        err,
        StorageError::NotFound {
            entity: EntityKind::Booking,
            id: 42
        }
    ));
}

#[test]
fn getters_return_none_for_unknown_ids() {
    let storage = MemStorage::new();
    assert!(storage.get_contact_message(1).is_none());
    assert!(storage.get_booking(0).is_none());
    assert!(storage.get_review(-1).is_none());
    assert!(storage.approve_review(3).is_err());
}
