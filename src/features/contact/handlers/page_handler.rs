use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::Result;
use crate::features::contact::models::{ContactType, RawSubmission};
use crate::features::contact::services::SubmissionService;
use crate::features::contact::view::{render_form_page, FormEvent, FormValues, FormView};

/// Contact page in its initial state
pub async fn show_form() -> Result<Html<String>> {
    render_form_page(&FormView::new(), &FormValues::default()).map(Html)
}

/// Form action: run the submission and re-render the page with its outcome
pub async fn submit_form(
    State(service): State<Arc<SubmissionService>>,
    submission: RawSubmission,
) -> Result<Html<String>> {
    let mut view = FormView::new();
    if let Some(contact_type) = submission
        .text("type")
        .and_then(|t| t.parse::<ContactType>().ok())
    {
        view.apply(FormEvent::TypeSelected(contact_type));
    }
    view.apply(FormEvent::FilesSelected(submission.attachment_names()));
    view.apply(FormEvent::Submitted);

    let result = service.submit(&submission).await;
    let values = if result.success {
        FormValues::default()
    } else {
        FormValues::from_submission(&submission)
    };
    view.apply(FormEvent::Resolved(result));

    render_form_page(&view, &values).map(Html)
}
