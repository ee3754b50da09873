//! Contact form as an explicit state machine.
//!
//! The page never mutates itself: events move a `FormView` between states and
//! [`FormView::presentation`] derives everything the template shows.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::features::contact::dtos::SubmissionResult;
use crate::features::contact::models::ContactType;
use crate::shared::constants::{FORM_ERROR_KEY, SUBMIT_LABEL_IDLE, SUBMIT_LABEL_PENDING};

/// Fields whose first violation is shown inline
const INLINE_ERROR_FIELDS: [&str; 4] = ["type", "name", "email", "message"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(SubmissionResult),
    Failed(SubmissionResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    TypeSelected(ContactType),
    FilesSelected(Vec<String>),
    Submitted,
    Resolved(SubmissionResult),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    selected_type: ContactType,
    file_names: Vec<String>,
    state: SubmissionState,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending)
    }

    /// Apply one event. Returns `false` when the event is not allowed in the
    /// current state and was ignored.
    pub fn apply(&mut self, event: FormEvent) -> bool {
        match event {
            FormEvent::TypeSelected(contact_type) => {
                self.selected_type = contact_type;
                true
            }
            FormEvent::FilesSelected(names) => {
                self.file_names = names;
                true
            }
            // One submission in flight per form
            FormEvent::Submitted if self.is_pending() => false,
            FormEvent::Submitted => {
                self.state = SubmissionState::Pending;
                true
            }
            FormEvent::Resolved(_) if !self.is_pending() => false,
            FormEvent::Resolved(result) if result.success => {
                self.file_names.clear();
                self.state = SubmissionState::Succeeded(result);
                true
            }
            FormEvent::Resolved(result) => {
                self.state = SubmissionState::Failed(result);
                true
            }
        }
    }

    pub fn presentation(&self) -> Presentation {
        let pending = self.is_pending();

        let type_options = ContactType::ALL
            .iter()
            .map(|t| TypeOption {
                value: t.as_str(),
                label: t.label(),
                selected: *t == self.selected_type,
            })
            .collect();

        let mut presentation = Presentation {
            selected_type: self.selected_type.as_str(),
            type_options,
            file_names: self.file_names.clone(),
            submit_disabled: pending,
            submit_label: if pending {
                SUBMIT_LABEL_PENDING
            } else {
                SUBMIT_LABEL_IDLE
            },
            field_errors: BTreeMap::new(),
            success: None,
            failure: None,
        };

        match &self.state {
            SubmissionState::Idle | SubmissionState::Pending => {}
            SubmissionState::Succeeded(result) => {
                let title = match result.echoed("name") {
                    Some(name) => format!("Thank you, {}!", name),
                    None => "Thank you!".to_string(),
                };
                presentation.success = Some(SuccessPanel {
                    title,
                    description: "Form submitted successfully!".to_string(),
                });
            }
            SubmissionState::Failed(result) => {
                presentation.field_errors = INLINE_ERROR_FIELDS
                    .into_iter()
                    .filter_map(|field| {
                        result
                            .first_error(field)
                            .map(|message| (field, message.to_string()))
                    })
                    .collect();

                presentation.failure = result.first_error(FORM_ERROR_KEY).map(str::to_string);
            }
        }

        presentation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessPanel {
    pub title: String,
    pub description: String,
}

/// Everything the page template needs, derived from a `FormView`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub selected_type: &'static str,
    pub type_options: Vec<TypeOption>,
    pub file_names: Vec<String>,
    pub submit_disabled: bool,
    pub submit_label: &'static str,
    /// First violation per field
    pub field_errors: BTreeMap<&'static str, String>,
    pub success: Option<SuccessPanel>,
    pub failure: Option<String>,
}
