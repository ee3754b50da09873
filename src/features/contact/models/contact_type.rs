use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Category a submitter picks for their message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum ContactType {
    #[default]
    Problem,
    Question,
    Feedback,
}

impl ContactType {
    pub const ALL: [ContactType; 3] = [
        ContactType::Problem,
        ContactType::Question,
        ContactType::Feedback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Problem => "Problem",
            ContactType::Question => "Question",
            ContactType::Feedback => "Feedback",
        }
    }

    /// Label shown next to the radio button
    pub fn label(&self) -> &'static str {
        match self {
            ContactType::Problem => "❗ Problem",
            ContactType::Question => "❓ Question",
            ContactType::Feedback => "💬 Feedback",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContactType(pub String);

impl fmt::Display for UnknownContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = ContactType::ALL
            .iter()
            .map(|t| format!("'{}'", t.as_str()))
            .collect::<Vec<_>>()
            .join(" | ");
        write!(
            f,
            "Invalid enum value. Expected {}, received '{}'",
            expected, self.0
        )
    }
}

impl FromStr for ContactType {
    type Err = UnknownContactType;

    /// Exact, case-sensitive match on the wire value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownContactType(s.to_string()))
    }
}
