use axum::{
    body::{Body, Bytes},
    extract::{Form, FromRequest, Multipart, Request},
    http::{header, StatusCode},
};
use tracing::debug;

use crate::core::error::AppError;
use crate::features::contact::models::{FieldValue, FilePart, FormEntry, RawSubmission};

const MULTIPART: &str = "multipart/form-data";
const URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// Reads a form post, keeping the raw body for relaying and parsing its
/// entries for validation.
impl<S> FromRequest<S> for RawSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_default();

        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime != MULTIPART && mime != URL_ENCODED {
            return Err(AppError::UnsupportedMediaType(format!(
                "Expected {} or {}, got '{}'",
                MULTIPART, URL_ENCODED, content_type
            )));
        }

        let (parts, body) = req.into_parts();

        // Buffering honours the router's DefaultBodyLimit
        let body = Bytes::from_request(Request::from_parts(parts.clone(), body), state)
            .await
            .map_err(|rejection| {
                debug!("Failed to buffer form body: {}", rejection.body_text());
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge("Form submission is too large".to_string())
                } else {
                    AppError::BadRequest(format!(
                        "Failed to read form data: {}",
                        rejection.body_text()
                    ))
                }
            })?;

        let replay = Request::from_parts(parts, Body::from(body.clone()));
        let entries = if mime == MULTIPART {
            let multipart = Multipart::from_request(replay, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            parse_multipart(multipart).await?
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(replay, state)
                .await
                .map_err(|e| {
                    debug!("Failed to decode url-encoded form: {}", e.body_text());
                    AppError::BadRequest(format!("Failed to read form data: {}", e.body_text()))
                })?;
            text_entries(pairs)
        };

        Ok(RawSubmission::new(content_type, body, entries))
    }
}

async fn parse_multipart(mut multipart: Multipart) -> Result<Vec<FormEntry>, AppError> {
    let mut entries = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let name = field.name().unwrap_or_default().to_string();

        // Parts with a filename are files, even when empty
        let value = match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;
                FieldValue::File(FilePart {
                    file_name: Some(file_name),
                    content_type,
                    size: data.len(),
                })
            }
            None => FieldValue::Text(field.text().await.map_err(|e| {
                AppError::BadRequest(format!("Failed to read field '{}': {}", name, e))
            })?),
        };

        entries.push(FormEntry { name, value });
    }

    Ok(entries)
}

fn text_entries(pairs: Vec<(String, String)>) -> Vec<FormEntry> {
    pairs
        .into_iter()
        .map(|(name, value)| FormEntry {
            name,
            value: FieldValue::Text(value),
        })
        .collect()
}
