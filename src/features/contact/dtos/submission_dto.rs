use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::contact::models::{ContactType, RawSubmission};
use crate::shared::constants::{
    FORM_ERROR_KEY, MSG_FORM_SUBMITTED, MSG_REMOTE_REJECTED, MSG_TRANSPORT_FAILED,
};
use crate::shared::validation::EMAIL_REGEX;

/// Field name → ordered violation messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Field name → value the form backend reports as recorded
pub type EchoedValues = BTreeMap<String, Option<String>>;

/// Contact form fields as submitted, before any checks.
///
/// `None` means the field was absent from the form data.
/// Lengths are counted in UTF-16 code units, as browsers count them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SubmissionInput {
    #[validate(
        required(message = "Expected 'Problem' | 'Question' | 'Feedback', received null"),
        custom(function = "validate_contact_type")
    )]
    pub contact_type: Option<String>,

    #[validate(
        required(message = "Expected string, received null"),
        custom(function = "validate_name")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Expected string, received null"),
        regex(path = *EMAIL_REGEX, message = "Invalid email format")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Expected string, received null"),
        custom(function = "validate_message")
    )]
    pub message: Option<String>,
}

fn validate_contact_type(value: &str) -> Result<(), ValidationError> {
    value.parse::<ContactType>().map(|_| ()).map_err(|e| {
        ValidationError::new("enum").with_message(Cow::Owned(e.to_string()))
    })
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    min_utf16_length(value, 2, "Name must be at least 2 characters")
}

fn validate_message(value: &str) -> Result<(), ValidationError> {
    min_utf16_length(value, 5, "Message must be at least 5 characters")
}

fn min_utf16_length(
    value: &str,
    min: usize,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value.encode_utf16().count() >= min {
        Ok(())
    } else {
        Err(ValidationError::new("length").with_message(Cow::Borrowed(message)))
    }
}

impl SubmissionInput {
    pub fn from_raw(submission: &RawSubmission) -> Self {
        let field = |name: &str| submission.text(name).map(str::to_string);
        Self {
            contact_type: field("type"),
            name: field("name"),
            email: field("email"),
            message: field("message"),
        }
    }

    /// Every failing field with its messages, or `None` when the input is valid.
    ///
    /// All fields are checked; keys use the form's field names.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        let errors = self.validate().err()?;

        let field_errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, violations)| {
                let messages = violations
                    .iter()
                    .map(|v| {
                        v.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| v.code.to_string())
                    })
                    .collect();
                (form_field_name(&field).to_string(), messages)
            })
            .collect::<FieldErrors>();

        Some(field_errors)
    }
}

/// Maps struct field names back to the names the form posts
fn form_field_name(field: &str) -> &str {
    match field {
        "contact_type" => "type",
        other => other,
    }
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResult {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Values the form backend reports as recorded
    #[serde(
        rename = "formValues",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub echoed_values: Option<EchoedValues>,

    /// Per-field violations; the `form` key holds errors not tied to a field
    #[serde(rename = "errors", default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl SubmissionResult {
    pub fn submitted(echoed_values: Option<EchoedValues>) -> Self {
        Self {
            success: true,
            message: Some(MSG_FORM_SUBMITTED.to_string()),
            echoed_values,
            field_errors: None,
        }
    }

    pub fn invalid(field_errors: FieldErrors) -> Self {
        Self {
            success: false,
            field_errors: Some(field_errors),
            ..Default::default()
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: Some(MSG_REMOTE_REJECTED.to_string()),
            ..Default::default()
        }
    }

    pub fn transport_failure() -> Self {
        let mut field_errors = FieldErrors::new();
        field_errors.insert(
            FORM_ERROR_KEY.to_string(),
            vec![MSG_TRANSPORT_FAILED.to_string()],
        );
        Self::invalid(field_errors)
    }

    /// First violation recorded for `field`
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .as_ref()?
            .get(field)?
            .first()
            .map(String::as_str)
    }

    pub fn echoed(&self, field: &str) -> Option<&str> {
        self.echoed_values.as_ref()?.get(field)?.as_deref()
    }
}

/// Contact form submission (multipart/form-data or application/x-www-form-urlencoded)
///
/// Note: This struct is for Swagger UI documentation only.
/// The handlers read the raw body through the `RawSubmission` extractor.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ContactSubmissionDto {
    /// One of "Problem", "Question" or "Feedback"
    #[schema(example = "Question")]
    pub r#type: String,
    /// At least 2 characters
    #[schema(example = "Jo")]
    pub name: String,
    #[schema(example = "jo@example.com")]
    pub email: String,
    /// At least 5 characters
    #[schema(example = "Hello there")]
    pub message: String,
    /// Optional attachments; the form posts them as repeated `file[]` parts
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_input() -> SubmissionInput {
        SubmissionInput {
            contact_type: Some("Question".to_string()),
            name: Some("Jo".to_string()),
            email: Some("jo@example.com".to_string()),
            message: Some("Hello there".to_string()),
        }
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        assert_eq!(valid_input().field_errors(), None);
    }

    #[test]
    fn test_generated_submitters_are_valid() {
        for _ in 0..20 {
            let input = SubmissionInput {
                name: Some(format!("{}x", Name().fake::<String>())),
                email: Some(SafeEmail().fake()),
                ..valid_input()
            };
            assert_eq!(input.field_errors(), None, "{:?}", input);
        }
    }

    #[test]
    fn test_short_name() {
        let input = SubmissionInput {
            name: Some("J".to_string()),
            ..valid_input()
        };
        let errors = input.field_errors().unwrap();
        assert_eq!(
            errors.get("name"),
            Some(&vec!["Name must be at least 2 characters".to_string()])
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_name_length_counts_characters() {
        let input = SubmissionInput {
            name: Some("É".to_string()),
            ..valid_input()
        };
        assert!(input.field_errors().unwrap().contains_key("name"));

        let input = SubmissionInput {
            name: Some("Éa".to_string()),
            ..valid_input()
        };
        assert_eq!(input.field_errors(), None);
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // One emoji is two UTF-16 code units
        let input = SubmissionInput {
            name: Some("😀".to_string()),
            ..valid_input()
        };
        assert_eq!(input.field_errors(), None);

        let input = SubmissionInput {
            message: Some("😀😀".to_string()),
            ..valid_input()
        };
        assert!(input.field_errors().unwrap().contains_key("message"));

        let input = SubmissionInput {
            message: Some("😀😀a".to_string()),
            ..valid_input()
        };
        assert_eq!(input.field_errors(), None);
    }

    #[test]
    fn test_invalid_email() {
        for email in [
            "",
            "jo",
            "jo@",
            "@example.com",
            "jo example@x.com",
            "jo@localhost",
            "jo@example",
            "jo..x@example.com",
            ".jo@example.com",
            "jo@[127.0.0.1]",
            "jo!#$@example.com",
        ] {
            let input = SubmissionInput {
                email: Some(email.to_string()),
                ..valid_input()
            };
            let errors = input.field_errors().unwrap();
            assert_eq!(
                errors.get("email"),
                Some(&vec!["Invalid email format".to_string()]),
                "email {:?}",
                email
            );
        }
    }

    #[test]
    fn test_short_message() {
        let input = SubmissionInput {
            message: Some("Hey".to_string()),
            ..valid_input()
        };
        let errors = input.field_errors().unwrap();
        assert_eq!(
            errors.get("message"),
            Some(&vec!["Message must be at least 5 characters".to_string()])
        );
    }

    #[test]
    fn test_unknown_type_uses_form_field_name() {
        let input = SubmissionInput {
            contact_type: Some("Complaint".to_string()),
            ..valid_input()
        };
        let errors = input.field_errors().unwrap();
        assert_eq!(
            errors.get("type"),
            Some(&vec![
                "Invalid enum value. Expected 'Problem' | 'Question' | 'Feedback', received 'Complaint'"
                    .to_string()
            ])
        );
        assert!(!errors.contains_key("contact_type"));
    }

    #[test]
    fn test_all_fields_reported_together() {
        let input = SubmissionInput {
            contact_type: None,
            name: Some("J".to_string()),
            email: Some("nope".to_string()),
            message: None,
        };
        let errors = input.field_errors().unwrap();
        let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["email", "message", "name", "type"]);
        assert_eq!(
            errors["type"],
            vec!["Expected 'Problem' | 'Question' | 'Feedback', received null".to_string()]
        );
        assert_eq!(
            errors["message"],
            vec!["Expected string, received null".to_string()]
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let input = SubmissionInput {
            contact_type: Some("Nope".to_string()),
            name: Some("J".to_string()),
            email: Some("x".to_string()),
            message: Some("hi".to_string()),
        };
        assert_eq!(input.field_errors(), input.clone().field_errors());
    }

    #[test]
    fn test_result_serialization_uses_wire_names() {
        let mut echoed = EchoedValues::new();
        echoed.insert("name".to_string(), Some("Jo".to_string()));

        let json = serde_json::to_value(SubmissionResult::submitted(Some(echoed))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "Form submitted successfully",
                "formValues": { "name": "Jo" }
            })
        );

        let json = serde_json::to_value(SubmissionResult::rejected()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Error submitting form" })
        );

        let json = serde_json::to_value(SubmissionResult::transport_failure()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "errors": { "form": ["Failed to submit form"] } })
        );
    }

    #[test]
    fn test_first_error_and_echoed_lookup() {
        let result = SubmissionResult::transport_failure();
        assert_eq!(result.first_error("form"), Some("Failed to submit form"));
        assert_eq!(result.first_error("name"), None);
        assert_eq!(result.echoed("name"), None);
    }
}
