use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::features::contact::handlers;
use crate::features::contact::services::SubmissionService;

/// Create routes for the contact feature
///
/// Public: the page and the JSON endpoint accept anonymous submissions.
/// `max_body_size` caps the buffered form body, attachments included.
pub fn routes(service: Arc<SubmissionService>, max_body_size: usize) -> Router {
    Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .route("/api/contact", post(handlers::submit_contact))
        .layer(DefaultBodyLimit::max(max_body_size))
        .with_state(service)
}
