use folio_models::contact::{FieldName, FormMessage, FormMessageId, SubmitControl};

/// Binding between the contact form core and whatever renders the form.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormView: Send + Sync + 'static {
    /// Returns the current value of the control bound to `field`, or `None`
    /// if no such control exists.
    fn field_value(&self, field: FieldName) -> Option<String>;

    /// Replaces the error annotation of `field`. `None` clears it.
    fn set_field_error(&self, field: FieldName, error: Option<String>);

    fn form_message(&self) -> Option<FormMessage>;

    /// Replaces the form-level message. `None` clears it.
    fn set_form_message(&self, message: Option<FormMessage>);

    /// Clears the form-level message only if it is still the one with the
    /// given `id`. Returns whether a message was removed.
    fn clear_form_message(&self, id: FormMessageId) -> bool;

    fn submit_control(&self) -> SubmitControl;

    fn set_submit_control(&self, control: SubmitControl);

    /// Resets all field values to empty.
    fn reset_fields(&self);
}

#[cfg(feature = "mock")]
impl MockFormView {
    pub fn with_field_value(mut self, field: FieldName, value: Option<String>) -> Self {
        self.expect_field_value()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(value);
        self
    }

    pub fn with_submit_control(mut self, control: SubmitControl) -> Self {
        self.expect_submit_control().return_const(control);
        self
    }

    pub fn with_set_field_error(mut self, field: FieldName, error: Option<String>) -> Self {
        self.expect_set_field_error()
            .once()
            .with(mockall::predicate::eq(field), mockall::predicate::eq(error))
            .return_const(());
        self
    }
}
