use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the inputs of the contact form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in the order they appear in the form.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The `name` attribute of the form control bound to this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field: {0}")]
pub struct FieldNameParseError(pub String);

impl FromStr for FieldName {
    type Err = FieldNameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldNameParseError(s.into()))
    }
}

/// Snapshot of the raw field values at the time of a validation or submission
/// attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord(BTreeMap<FieldName, String>);

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of `field`, or an empty string if the field is
    /// absent from the record.
    pub fn get(&self, field: FieldName) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: FieldName, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(&field, value)| (field, value.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(FieldName, S)> for FormRecord {
    fn from_iter<T: IntoIterator<Item = (FieldName, S)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field, value.into()))
                .collect(),
        )
    }
}

/// Per-field verdicts for a [`FormRecord`]. A field without an entry (or with
/// an empty message) is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult(BTreeMap<FieldName, String>);

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Whether the validated record may be submitted.
    pub fn is_submittable(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Iterates over the non-empty error messages.
    pub fn errors(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(&field, message)| (field, message.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for ValidationResult {
    fn from_iter<T: IntoIterator<Item = (FieldName, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result reported by the external submit capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success,
    Failure { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMessageKind {
    Success,
    Failure,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FormMessageId(pub u64);

/// Transient form-level status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMessage {
    pub id: FormMessageId,
    pub text: String,
    pub kind: FormMessageKind,
}

/// State of the form's submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_field_name() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert_eq!(
            "phone".parse::<FieldName>(),
            Err(FieldNameParseError("phone".into()))
        );
    }

    #[test]
    fn record_absent_field_is_empty() {
        let record = FormRecord::new().with(FieldName::Name, "Max");

        assert_eq!(record.get(FieldName::Name), "Max");
        assert_eq!(record.get(FieldName::Email), "");
        assert!(!record.contains(FieldName::Email));
    }

    #[test]
    fn submittable() {
        let mut result = ValidationResult::new();
        assert!(result.is_submittable());

        result.insert(FieldName::Name, "");
        assert!(result.is_submittable());
        assert_eq!(result.error(FieldName::Name), None);

        result.insert(FieldName::Email, "Please enter a valid email address");
        assert!(!result.is_submittable());
        assert_eq!(
            result.errors().collect::<Vec<_>>(),
            [(FieldName::Email, "Please enter a valid email address")]
        );
    }

    #[test]
    fn serialize_record() {
        let record = FormRecord::new()
            .with(FieldName::Email, "a@b.com")
            .with(FieldName::Name, "Al");

        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"name":"Al","email":"a@b.com"}"#);
    }
}
