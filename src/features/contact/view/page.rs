use minijinja::context;
use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::features::contact::models::RawSubmission;
use crate::features::contact::view::state::FormView;
use crate::shared::constants::SUBMIT_LABEL_PENDING;
use crate::shared::templates::render_template;

const FORM_TEMPLATE: &str = "contact/form.html";

/// Text inputs re-populated into the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn from_submission(submission: &RawSubmission) -> Self {
        let field = |name: &str| submission.text(name).unwrap_or_default().to_string();
        Self {
            name: field("name"),
            email: field("email"),
            message: field("message"),
        }
    }
}

/// Render the contact page for the current view state
pub fn render_form_page(view: &FormView, values: &FormValues) -> Result<String> {
    let ctx = context! {
        view => view.presentation(),
        values => values,
        pending_label => SUBMIT_LABEL_PENDING,
    };

    render_template(FORM_TEMPLATE, ctx).map_err(|e| AppError::Internal(e.to_string()))
}
