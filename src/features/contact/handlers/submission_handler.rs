use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::contact::dtos::{ContactSubmissionDto, SubmissionResult};
use crate::features::contact::models::RawSubmission;
use crate::features::contact::services::SubmissionService;

/// Submit the contact form
///
/// Validates the submission and relays it unchanged to the form backend.
/// Validation and backend failures are reported in the body, never as an
/// error status.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body(
        content = ContactSubmissionDto,
        content_type = "multipart/form-data",
        description = "Contact form fields with optional `file[]` attachments",
    ),
    responses(
        (status = 200, description = "Submission processed; see `success`", body = SubmissionResult),
        (status = 400, description = "Unreadable form data"),
        (status = 413, description = "Submission too large"),
        (status = 415, description = "Not a form submission")
    )
)]
pub async fn submit_contact(
    State(service): State<Arc<SubmissionService>>,
    submission: RawSubmission,
) -> Json<SubmissionResult> {
    Json(service.submit(&submission).await)
}
