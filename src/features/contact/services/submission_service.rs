use std::sync::Arc;

use crate::features::contact::clients::{FormBackend, FormBackendError};
use crate::features::contact::dtos::{SubmissionInput, SubmissionResult};
use crate::features::contact::models::RawSubmission;

/// Validates contact submissions and relays the valid ones to the form backend
pub struct SubmissionService {
    backend: Arc<dyn FormBackend>,
}

impl SubmissionService {
    pub fn new(backend: Arc<dyn FormBackend>) -> Self {
        Self { backend }
    }

    /// Handle one submission attempt.
    ///
    /// Never fails: every outcome, including backend failures, is folded into
    /// the returned `SubmissionResult`.
    pub async fn submit(&self, submission: &RawSubmission) -> SubmissionResult {
        let input = SubmissionInput::from_raw(submission);
        for part in submission.attachments() {
            tracing::debug!(
                "Attachment: name={:?}, content_type={:?}, size={}",
                part.file_name,
                part.content_type,
                part.size
            );
        }
        let attachments = submission.attachments().count();

        if let Some(field_errors) = input.field_errors() {
            tracing::info!(
                "Submission rejected by validation: fields={:?}",
                field_errors.keys().collect::<Vec<_>>()
            );
            return SubmissionResult::invalid(field_errors);
        }

        match self.backend.forward(submission).await {
            Ok(receipt) => {
                tracing::info!(
                    "Submission relayed: type={}, attachments={}",
                    input.contact_type.as_deref().unwrap_or("-"),
                    attachments
                );
                SubmissionResult::submitted(receipt.echoed_values)
            }
            Err(FormBackendError::Rejected { status }) => {
                tracing::warn!("Submission rejected by form backend: HTTP {}", status);
                SubmissionResult::rejected()
            }
            Err(e) => {
                tracing::warn!("Submission could not be relayed: {}", e);
                SubmissionResult::transport_failure()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::clients::form_backend_client::BackendReceipt;
    use crate::features::contact::dtos::EchoedValues;
    use crate::features::contact::models::{FieldValue, FormEntry};
    use async_trait::async_trait;
    use axum::body::Bytes;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Reply {
        Echo(&'static str),
        Status(u16),
        Transport,
        InvalidBody,
    }

    struct StubBackend {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl FormBackend for StubBackend {
        async fn forward(
            &self,
            _submission: &RawSubmission,
        ) -> Result<BackendReceipt, FormBackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Reply::Echo(name) => {
                    let mut echoed = EchoedValues::new();
                    echoed.insert("name".to_string(), Some(name.to_string()));
                    Ok(BackendReceipt {
                        echoed_values: Some(echoed),
                    })
                }
                Reply::Status(status) => Err(FormBackendError::Rejected { status }),
                Reply::Transport => Err(FormBackendError::Transport("connection refused".into())),
                Reply::InvalidBody => Err(FormBackendError::InvalidBody("expected value".into())),
            }
        }
    }

    fn submission(fields: &[(&str, &str)]) -> RawSubmission {
        let entries = fields
            .iter()
            .map(|(name, value)| FormEntry {
                name: name.to_string(),
                value: FieldValue::Text(value.to_string()),
            })
            .collect();
        RawSubmission::new("application/x-www-form-urlencoded", Bytes::new(), entries)
    }

    fn valid_submission() -> RawSubmission {
        submission(&[
            ("type", "Question"),
            ("name", "Jo"),
            ("email", "jo@example.com"),
            ("message", "Hello there"),
        ])
    }

    #[tokio::test]
    async fn test_submit_success_echoes_values() {
        let backend = StubBackend::new(Reply::Echo("Jo"));
        let service = SubmissionService::new(backend.clone());

        let result = service.submit(&valid_submission()).await;

        assert!(result.success);
        assert_eq!(result.message.as_deref(), Some("Form submitted successfully"));
        assert_eq!(result.echoed("name"), Some("Jo"));
        assert_eq!(result.field_errors, None);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_remote_rejection() {
        let service = SubmissionService::new(StubBackend::new(Reply::Status(500)));

        let result = service.submit(&valid_submission()).await;

        assert_eq!(result, SubmissionResult::rejected());
    }

    #[tokio::test]
    async fn test_submit_transport_failure() {
        let service = SubmissionService::new(StubBackend::new(Reply::Transport));

        let result = service.submit(&valid_submission()).await;

        assert!(!result.success);
        assert_eq!(result.message, None);
        assert_eq!(result.first_error("form"), Some("Failed to submit form"));
    }

    #[tokio::test]
    async fn test_submit_unreadable_reply_is_form_error() {
        let service = SubmissionService::new(StubBackend::new(Reply::InvalidBody));

        let result = service.submit(&valid_submission()).await;

        assert_eq!(result, SubmissionResult::transport_failure());
    }

    #[tokio::test]
    async fn test_invalid_type_never_reaches_backend() {
        let backend = StubBackend::new(Reply::Echo("Jo"));
        let service = SubmissionService::new(backend.clone());

        for fields in [
            vec![
                ("name", "Jo"),
                ("email", "jo@example.com"),
                ("message", "Hello there"),
            ],
            vec![
                ("type", "Complaint"),
                ("name", "Jo"),
                ("email", "jo@example.com"),
                ("message", "Hello there"),
            ],
        ] {
            let result = service.submit(&submission(&fields)).await;
            assert!(!result.success);
            assert!(result.first_error("type").is_some());
        }

        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_validation_errors_reported_together() {
        let service = SubmissionService::new(StubBackend::new(Reply::Echo("Jo")));

        let result = service
            .submit(&submission(&[
                ("type", "Problem"),
                ("name", "J"),
                ("email", "not-an-email"),
                ("message", "Hey"),
            ]))
            .await;

        assert!(!result.success);
        assert_eq!(result.message, None);
        assert_eq!(
            result.first_error("name"),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(result.first_error("email"), Some("Invalid email format"));
        assert_eq!(
            result.first_error("message"),
            Some("Message must be at least 5 characters")
        );
        assert_eq!(result.first_error("type"), None);
    }
}
