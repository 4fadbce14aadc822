use folio_models::contact::{FieldName, FormRecord, ValidationResult};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormValidationService: Send + Sync + 'static {
    /// Return the error message for `value` if it is not valid for `field`.
    fn validate(&self, field: FieldName, value: &str) -> Option<String>;

    /// Validate every known field of `record`. Fields absent from the record
    /// are validated as empty strings.
    fn validate_all(&self, record: &FormRecord) -> ValidationResult;
}

#[cfg(feature = "mock")]
impl MockContactFormValidationService {
    pub fn with_validate_all(mut self, record: FormRecord, result: ValidationResult) -> Self {
        self.expect_validate_all()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| result);
        self
    }
}
