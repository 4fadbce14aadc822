use std::future::Future;

use folio_models::contact::{FieldName, ValidationResult};

pub mod presenter;
pub mod validation;

pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate the current value of a single field and show the verdict next
    /// to it. Returns the error message, if any.
    ///
    /// Intended to be called when a control loses focus.
    fn validate_field(&self, field: FieldName) -> Option<String>;

    /// Remove the error annotation of a field, e.g. while the user is typing.
    fn clear_field_error(&self, field: FieldName);

    /// Validate the whole form and, if every field is valid, send it using
    /// the external submit capability.
    ///
    /// - Invalid forms are never sent; the per-field errors are shown instead.
    /// - While the submission is in flight the submit control is disabled and
    ///   shows a busy label. The original control is restored on every exit
    ///   path.
    /// - On success the fields are cleared. On failure they are kept.
    /// - A transient status message is shown in both cases.
    fn submit(&self) -> impl Future<Output = ContactSubmitResult> + Send;

    fn state(&self) -> ContactFormState;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSubmitResult {
    /// At least one field is invalid. Nothing was sent.
    Invalid(ValidationResult),
    Sent,
    /// The submit capability failed. Details have been logged.
    Failed,
    /// Another submission from this form is still in flight.
    Busy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactFormState {
    #[default]
    Idle,
    Validating,
    Submitting,
}
