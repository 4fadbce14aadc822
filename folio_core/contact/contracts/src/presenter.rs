use folio_models::contact::{FieldName, FormMessageKind, ValidationResult};

/// Renders validation feedback and status messages into the form view.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormPresenter: Send + Sync + 'static {
    /// Replace the error annotation of `field`. `None` or an empty message
    /// clears it.
    fn show_field_error(&self, field: FieldName, error: Option<String>);

    /// Show the error of every field in `result` and clear the annotation of
    /// every valid field.
    fn show_field_errors(&self, result: &ValidationResult);

    /// Replace the form-level message. The message removes itself after the
    /// configured time to live unless it has been replaced before.
    ///
    /// Must be called from within a tokio runtime.
    fn show_form_message(&self, text: String, kind: FormMessageKind);
}

#[cfg(feature = "mock")]
impl MockContactFormPresenter {
    pub fn with_show_field_error(mut self, field: FieldName, error: Option<String>) -> Self {
        self.expect_show_field_error()
            .once()
            .with(mockall::predicate::eq(field), mockall::predicate::eq(error))
            .return_const(());
        self
    }
}
