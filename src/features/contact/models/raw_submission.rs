use axum::body::Bytes;

/// Field names the contact form posts attachments under
pub const ATTACHMENT_FIELDS: [&str; 2] = ["file[]", "file"];

/// A file part of a submitted form. The bytes stay in the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(FilePart),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEntry {
    pub name: String,
    pub value: FieldValue,
}

/// A submission exactly as the browser sent it.
///
/// `body` and `content_type` are relayed to the form backend untouched;
/// `entries` is the parsed view used for validation and logging.
#[derive(Debug, Clone)]
pub struct RawSubmission {
    pub content_type: String,
    pub body: Bytes,
    pub entries: Vec<FormEntry>,
}

impl RawSubmission {
    pub fn new(content_type: impl Into<String>, body: Bytes, entries: Vec<FormEntry>) -> Self {
        Self {
            content_type: content_type.into(),
            body,
            entries,
        }
    }

    /// First entry under `name`, if it is a text value
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.entries.iter().find(|e| e.name == name)?.value {
            FieldValue::Text(ref value) => Some(value.as_str()),
            FieldValue::File(_) => None,
        }
    }

    /// File parts carrying an actual file (browsers send an empty part when nothing is picked)
    pub fn attachments(&self) -> impl Iterator<Item = &FilePart> {
        self.entries
            .iter()
            .filter(|e| ATTACHMENT_FIELDS.contains(&e.name.as_str()))
            .filter_map(|e| match e.value {
                FieldValue::File(ref part) => Some(part),
                FieldValue::Text(_) => None,
            })
            .filter(|part| part.file_name.as_deref().is_some_and(|n| !n.is_empty()))
    }

    pub fn attachment_names(&self) -> Vec<String> {
        self.attachments()
            .filter_map(|part| part.file_name.clone())
            .collect()
    }
}
