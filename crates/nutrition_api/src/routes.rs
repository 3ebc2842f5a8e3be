//! Route dispatch and handlers.
//!
//! # Responsibility
//! - Map method + path to a use case on `SubmissionService`.
//! - Map use-case results to status codes and JSON bodies.
//!
//! # Invariants
//! - Handlers never panic; unexpected failures become 500 responses.
//! - Attachments are written only after the contact payload validates.
//! - Debug listing routes exist only when enabled by configuration.

use crate::config::ApiConfig;
use crate::request::{ApiRequest, ApiResponse, Method};
use crate::uploads::UploadStore;
use log::{error, info};
use nutrition_core::{ServiceError, Storage, SubmissionService};
use serde::Serialize;
use serde_json::json;

pub const NEWSLETTER_PATH: &str = "/api/newsletter";
pub const CONTACT_PATH: &str = "/api/contact";
pub const BOOKINGS_PATH: &str = "/api/bookings";
pub const REVIEWS_PATH: &str = "/api/reviews";
pub const DEBUG_SUBSCRIBERS_PATH: &str = "/api/debug/subscribers";
pub const DEBUG_CONTACTS_PATH: &str = "/api/debug/contacts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Newsletter,
    Contact,
    Bookings,
    Reviews,
    DebugSubscribers,
    DebugContacts,
}

impl Route {
    fn resolve(path: &str, debug_routes: bool) -> Option<Self> {
        let route = match path {
            NEWSLETTER_PATH => Self::Newsletter,
            CONTACT_PATH => Self::Contact,
            BOOKINGS_PATH => Self::Bookings,
            REVIEWS_PATH => Self::Reviews,
            DEBUG_SUBSCRIBERS_PATH if debug_routes => Self::DebugSubscribers,
            DEBUG_CONTACTS_PATH if debug_routes => Self::DebugContacts,
            _ => return None,
        };
        Some(route)
    }

    fn method(self) -> Method {
        match self {
            Self::Newsletter | Self::Contact | Self::Bookings => Method::Post,
            Self::Reviews | Self::DebugSubscribers | Self::DebugContacts => Method::Get,
        }
    }
}

/// Request handler set bound to one storage instance.
pub struct Api<S: Storage> {
    service: SubmissionService<S>,
    uploads: UploadStore,
    debug_routes: bool,
}

impl<S: Storage> Api<S> {
    /// Builds handlers over `storage` using `config` for uploads and routes.
    pub fn new(storage: S, config: &ApiConfig) -> Self {
        Self {
            service: SubmissionService::new(storage),
            uploads: UploadStore::new(config.upload_dir.clone()),
            debug_routes: config.debug_routes,
        }
    }

    pub fn service(&self) -> &SubmissionService<S> {
        &self.service
    }

    /// Dispatches one request.
    pub fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let path = request.route_path();
        let response = match Route::resolve(path, self.debug_routes) {
            None => ApiResponse::message(404, "Not found"),
            Some(route) if route.method() != request.method => {
                ApiResponse::message(405, "Method not allowed")
            }
            Some(Route::Newsletter) => self.subscribe(request),
            Some(Route::Contact) => self.contact(request),
            Some(Route::Bookings) => self.booking(request),
            Some(Route::Reviews) => {
                list_response(&self.service.approved_reviews(), "Failed to fetch reviews")
            }
            Some(Route::DebugSubscribers) => list_response(
                &self.service.all_subscribers(),
                "Failed to fetch subscribers",
            ),
            Some(Route::DebugContacts) => list_response(
                &self.service.all_contact_messages(),
                "Failed to fetch contact messages",
            ),
        };

        info!(
            "event=request_handled module=api method={} path={} status={}",
            request.method, path, response.status
        );
        response
    }

    fn subscribe(&self, request: &ApiRequest) -> ApiResponse {
        match self.service.subscribe(&request.body) {
            Ok(subscriber) => ApiResponse::json(
                201,
                json!({
                    "message": "Subscription successful",
                    "subscriber": {
                        "id": subscriber.id,
                        "email": subscriber.email,
                        "firstName": subscriber.first_name,
                        "lastName": subscriber.last_name,
                    }
                }),
            ),
            Err(ServiceError::Conflict(_)) => {
                ApiResponse::message(409, "Email is already subscribed")
            }
            Err(err) => service_failure(err),
        }
    }

    fn contact(&self, request: &ApiRequest) -> ApiResponse {
        if let Err(err) = self.service.check_contact(&request.body) {
            return service_failure(err);
        }

        let document_urls = if request.attachments.is_empty() {
            None
        } else {
            match self.uploads.store(&request.attachments) {
                Ok(paths) => Some(paths),
                Err(err) if err.is_client_error() => {
                    return ApiResponse::message(400, err.to_string());
                }
                Err(err) => {
                    error!(
                        "event=contact_submit module=api status=error reason=upload error={}",
                        err
                    );
                    return ApiResponse::message(500, "Failed to submit contact form");
                }
            }
        };

        match self.service.submit_contact(&request.body, document_urls) {
            Ok(message) => ApiResponse::json(
                201,
                json!({
                    "message": "Contact form submitted successfully",
                    "contactId": message.id,
                }),
            ),
            Err(err) => service_failure(err),
        }
    }

    fn booking(&self, request: &ApiRequest) -> ApiResponse {
        match self.service.request_booking(&request.body) {
            Ok(booking) => ApiResponse::json(
                201,
                json!({
                    "message": "Booking request received",
                    "bookingId": booking.id,
                    "status": booking.status,
                }),
            ),
            Err(err) => service_failure(err),
        }
    }
}

fn service_failure(err: ServiceError) -> ApiResponse {
    match err {
        ServiceError::Validation(validation) => ApiResponse::json(
            400,
            json!({
                "message": validation.to_string(),
                "errors": validation.issues,
            }),
        ),
        ServiceError::Conflict(entity) => {
            ApiResponse::message(409, format!("{entity} already exists"))
        }
        ServiceError::NotFound { entity, id } => {
            ApiResponse::message(404, format!("{entity} not found: {id}"))
        }
    }
}

fn list_response<T: Serialize>(items: &[T], failure_message: &str) -> ApiResponse {
    match serde_json::to_value(items) {
        Ok(body) => ApiResponse::json(200, body),
        Err(err) => {
            error!("event=list_serialize module=api status=error error={}", err);
            ApiResponse::message(500, failure_message)
        }
    }
}
