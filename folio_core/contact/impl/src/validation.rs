use std::sync::LazyLock;

use folio_core_contact_contracts::validation::ContactFormValidationService;
use folio_models::contact::{FieldName, FormRecord, ValidationResult};
use regex::Regex;

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormValidationServiceImpl;

/// Whitespace as understood by browsers, which also includes the byte order
/// mark.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

impl ContactFormValidationService for ContactFormValidationServiceImpl {
    fn validate(&self, field: FieldName, value: &str) -> Option<String> {
        let value = value.trim_matches(is_blank);
        let (valid, message) = match field {
            FieldName::Name => (
                min_chars(value, 2),
                "Name must be at least 2 characters long",
            ),
            FieldName::Email => (
                EMAIL_REGEX.is_match(value),
                "Please enter a valid email address",
            ),
            FieldName::Subject => (
                min_chars(value, 3),
                "Subject must be at least 3 characters long",
            ),
            FieldName::Message => (
                min_chars(value, 10),
                "Message must be at least 10 characters long",
            ),
        };
        (!valid).then(|| message.into())
    }

    fn validate_all(&self, record: &FormRecord) -> ValidationResult {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| {
                self.validate(field, record.get(field))
                    .map(|error| (field, error))
            })
            .collect()
    }
}
