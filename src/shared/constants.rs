// =============================================================================
// SUBMISSION RESULT MESSAGES
// =============================================================================

/// Returned when the form backend accepted the submission
pub const MSG_FORM_SUBMITTED: &str = "Form submitted successfully";

/// Returned when the form backend answered with a non-2xx status
pub const MSG_REMOTE_REJECTED: &str = "Error submitting form";

/// Form-level error when the form backend could not be reached
pub const MSG_TRANSPORT_FAILED: &str = "Failed to submit form";

/// Key under which errors not tied to a single field are reported
pub const FORM_ERROR_KEY: &str = "form";

// =============================================================================
// FORM VIEW
// =============================================================================

pub const SUBMIT_LABEL_IDLE: &str = "Send message";

pub const SUBMIT_LABEL_PENDING: &str = "Sending...";

/// User agent for outbound calls to the form backend
pub const USER_AGENT: &str = concat!("ContactRelay/", env!("CARGO_PKG_VERSION"));
