use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating form backend identifiers
    /// Must be non-empty and contain only ASCII letters, digits, hyphens and underscores
    /// - Valid: "pbgxkvmb", "YOUR_FORM_ID", "a-b_c9"
    /// - Invalid: "", "form id", "abc/../x", "form?x=1"
    pub static ref FORM_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();

    /// Regex for validating submitter email addresses
    /// Local part: letters, digits and `_ ' + - .`, no leading or doubled dots,
    /// not ending in `.` or `'`. Domain: dotted labels ending in a 2+ letter TLD
    /// - Valid: "jo@example.com", "o'brien+tag@mail.example.co.uk", "jo.x@example.org"
    /// - Invalid: "jo@localhost", ".jo@example.com", "jo..x@example.com", "jo@[127.0.0.1]"
    pub static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^(?:[A-Z0-9_'+\-]+\.)*[A-Z0-9_'+\-]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$"
    )
    .unwrap();
}
