pub mod contact_type;
pub mod raw_submission;

pub use contact_type::ContactType;
pub use raw_submission::{FieldValue, FilePart, FormEntry, RawSubmission};
