//! Launch testimonials shown before any visitor review is approved.

use crate::model::review::{NewReview, Review};
use crate::storage::Storage;

fn launch_testimonials() -> Vec<NewReview> {
    vec![
        NewReview {
            initials: "JD".to_string(),
            name: "Jane D.".to_string(),
            stars: 5,
            quote: "Working with Generational Nutrition changed my relationship with food. \
                    I've finally found a sustainable approach to eating that supports my health \
                    conditions while still enjoying meals."
                .to_string(),
            duration: Some("Client for 8 months".to_string()),
        },
        NewReview {
            initials: "RS".to_string(),
            name: "Robert S.".to_string(),
            stars: 5,
            quote: "After struggling with digestive issues for years, the personalized nutrition \
                    plan helped me identify trigger foods and rebuild a diet that works for my \
                    body. My symptoms have improved dramatically."
                .to_string(),
            duration: Some("Client for 1 year".to_string()),
        },
        NewReview {
            initials: "MT".to_string(),
            name: "Maria T.".to_string(),
            stars: 4,
            quote: "The consultation process was so thorough. Instead of generic advice, I \
                    received a plan that considered my medical history, lifestyle, and \
                    preferences. It's been easy to follow and the results speak for themselves."
                .to_string(),
            duration: Some("Client for 6 months".to_string()),
        },
    ]
}

/// Inserts and approves the launch testimonials, returning the approved
/// records in insertion order.
pub fn seed_testimonials(storage: &impl Storage) -> Vec<Review> {
    launch_testimonials()
        .into_iter()
        .filter_map(|input| {
            let created = storage.create_review(input);
            storage.approve_review(created.id).ok()
        })
        .collect()
}
