use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::config::FormBackendConfig;
use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::EchoedValues;
use crate::features::contact::models::RawSubmission;
use crate::shared::constants::USER_AGENT;

/// Failures talking to the form backend
#[derive(Debug, Error)]
pub enum FormBackendError {
    /// The backend answered with a non-2xx status
    #[error("Form backend rejected submission: HTTP {status}")]
    Rejected { status: u16 },

    /// No response was obtained (connect, DNS, TLS, reset...)
    #[error("Form backend unreachable: {0}")]
    Transport(String),

    /// A 2xx response whose body is not JSON
    #[error("Form backend returned an unreadable body: {0}")]
    InvalidBody(String),
}

/// What the backend reports back for an accepted submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendReceipt {
    pub echoed_values: Option<EchoedValues>,
}

/// Destination for validated submissions
#[async_trait]
pub trait FormBackend: Send + Sync {
    async fn forward(
        &self,
        submission: &RawSubmission,
    ) -> std::result::Result<BackendReceipt, FormBackendError>;
}

/// Getform-style JSON reply
#[derive(Debug, Deserialize)]
struct BackendReply {
    #[serde(rename = "formValues", default)]
    form_values: Option<Value>,
}

/// Best-effort conversion of the echoed `formValues` object.
///
/// Strings are kept, `null` stays `None`, other values are rendered as JSON text.
/// Anything other than an object yields `None`.
pub fn echoed_values_from(value: &Value) -> Option<EchoedValues> {
    let object = value.as_object()?;
    Some(
        object
            .iter()
            .map(|(key, value)| {
                let echoed = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                };
                (key.clone(), echoed)
            })
            .collect(),
    )
}

/// HTTP client relaying raw submissions to `POST {base_url}/f/{form_id}`
pub struct FormBackendClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl FormBackendClient {
    pub fn new(config: &FormBackendConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormBackend for FormBackendClient {
    async fn forward(
        &self,
        submission: &RawSubmission,
    ) -> std::result::Result<BackendReceipt, FormBackendError> {
        tracing::debug!(
            "Forwarding submission to form backend: {} ({} bytes)",
            self.endpoint,
            submission.body.len()
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, submission.content_type.as_str())
            .body(submission.body.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach form backend: {}", e);
                FormBackendError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Form backend error: HTTP {} - {}", status, body);
            return Err(FormBackendError::Rejected {
                status: status.as_u16(),
            });
        }

        let reply = response.json::<BackendReply>().await.map_err(|e| {
            tracing::error!("Failed to parse form backend response: {}", e);
            FormBackendError::InvalidBody(e.to_string())
        })?;

        Ok(BackendReceipt {
            echoed_values: reply.form_values.as_ref().and_then(echoed_values_from),
        })
    }
}
