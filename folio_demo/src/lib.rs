use std::sync::LazyLock;

use folio_models::contact::{FieldName, FormRecord};
use folio_view_impl::FormViewStateImpl;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

pub const NAME_ERROR: &str = "Name must be at least 2 characters long";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const SUBJECT_ERROR: &str = "Subject must be at least 3 characters long";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters long";

/// A record that passes validation for every field.
pub static VALID_RECORD: LazyLock<FormRecord> = LazyLock::new(|| {
    FormRecord::from_iter([
        (FieldName::Name, "Al"),
        (FieldName::Email, "a@b.com"),
        (FieldName::Subject, "Hi there"),
        (FieldName::Message, "This is a long enough message."),
    ])
});

/// A record that fails validation for every field.
pub static INVALID_RECORD: LazyLock<FormRecord> = LazyLock::new(|| {
    FormRecord::from_iter([
        (FieldName::Name, "A"),
        (FieldName::Email, "bad"),
        (FieldName::Subject, "Hi"),
        (FieldName::Message, "short"),
    ])
});

/// Creates a form view with every field bound and filled from `record`.
pub fn form_view(record: &FormRecord) -> FormViewStateImpl {
    let view = FormViewStateImpl::new(SUBMIT_LABEL);
    for (field, value) in record.iter() {
        view.set_field_value(field, value);
    }
    view
}
