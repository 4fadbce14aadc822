use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use folio_models::contact::{FieldName, FormMessage, FormMessageId, SubmitControl};
use folio_utils::LockExt;
use folio_view_contracts::FormView;
use serde::Serialize;
use tracing::warn;

/// Declarative state of the contact form. A rendering adapter applies a
/// [`FormViewState`] snapshot to the actual UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormViewState {
    /// Values of the bound controls. Fields without a control are absent.
    pub values: BTreeMap<FieldName, String>,
    pub errors: BTreeMap<FieldName, String>,
    pub message: Option<FormMessage>,
    pub submit: SubmitControl,
}

#[derive(Debug, Clone)]
pub struct FormViewStateImpl {
    state: Arc<Mutex<FormViewState>>,
}

impl FormViewStateImpl {
    /// Creates a view with a control for every [`FieldName`].
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self::with_fields(&FieldName::ALL, submit_label)
    }

    /// Creates a view with controls for the given fields only.
    pub fn with_fields(fields: &[FieldName], submit_label: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormViewState {
                values: fields.iter().map(|&f| (f, String::new())).collect(),
                errors: BTreeMap::new(),
                message: None,
                submit: SubmitControl::enabled(submit_label),
            })),
        }
    }

    /// Updates the value of a control, as typed by the user.
    pub fn set_field_value(&self, field: FieldName, value: impl Into<String>) {
        let mut state = self.state.lock_state();
        match state.values.get_mut(&field) {
            Some(slot) => *slot = value.into(),
            None => warn!(%field, "form has no control for field"),
        }
    }

    pub fn snapshot(&self) -> FormViewState {
        self.state.lock_state().clone()
    }
}

impl FormView for FormViewStateImpl {
    fn field_value(&self, field: FieldName) -> Option<String> {
        self.state.lock_state().values.get(&field).cloned()
    }

    fn set_field_error(&self, field: FieldName, error: Option<String>) {
        let mut state = self.state.lock_state();
        state.errors.remove(&field);
        if let Some(error) = error.filter(|e| !e.is_empty()) {
            state.errors.insert(field, error);
        }
    }

    fn form_message(&self) -> Option<FormMessage> {
        self.state.lock_state().message.clone()
    }

    fn set_form_message(&self, message: Option<FormMessage>) {
        self.state.lock_state().message = message;
    }

    fn clear_form_message(&self, id: FormMessageId) -> bool {
        let mut state = self.state.lock_state();
        if state.message.as_ref().is_some_and(|m| m.id == id) {
            state.message = None;
            true
        } else {
            false
        }
    }

    fn submit_control(&self) -> SubmitControl {
        self.state.lock_state().submit.clone()
    }

    fn set_submit_control(&self, control: SubmitControl) {
        self.state.lock_state().submit = control;
    }

    fn reset_fields(&self) {
        self.state
            .lock_state()
            .values
            .values_mut()
            .for_each(String::clear);
    }
}

#[cfg(test)]
mod tests {
    use folio_models::contact::FormMessageKind;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn field_values() {
        let sut = FormViewStateImpl::with_fields(&[FieldName::Name], "Send");

        sut.set_field_value(FieldName::Name, "Max");
        sut.set_field_value(FieldName::Email, "max@example.com");

        assert_eq!(sut.field_value(FieldName::Name), Some("Max".into()));
        assert_eq!(sut.field_value(FieldName::Email), None);

        sut.reset_fields();
        assert_eq!(sut.field_value(FieldName::Name), Some(String::new()));
    }

    #[test]
    fn field_error_replaces_previous() {
        let sut = FormViewStateImpl::new("Send");

        sut.set_field_error(FieldName::Subject, Some("first".into()));
        sut.set_field_error(FieldName::Subject, Some("second".into()));
        assert_eq!(
            sut.snapshot().errors,
            BTreeMap::from([(FieldName::Subject, "second".into())])
        );

        sut.set_field_error(FieldName::Subject, Some(String::new()));
        assert!(sut.snapshot().errors.is_empty());
    }

    #[test]
    fn clear_form_message_only_matching_id() {
        let sut = FormViewStateImpl::new("Send");
        let message = FormMessage {
            id: FormMessageId(2),
            text: "Thanks".into(),
            kind: FormMessageKind::Success,
        };
        sut.set_form_message(Some(message.clone()));

        assert!(!sut.clear_form_message(FormMessageId(1)));
        assert_eq!(sut.form_message(), Some(message));

        assert!(sut.clear_form_message(FormMessageId(2)));
        assert_eq!(sut.form_message(), None);
        assert!(!sut.clear_form_message(FormMessageId(2)));
    }

    #[test]
    fn clones_share_state() {
        let sut = FormViewStateImpl::new("Send");
        let other = sut.clone();

        other.set_submit_control(SubmitControl {
            label: "Sending...".into(),
            disabled: true,
        });

        assert!(sut.submit_control().disabled);
    }
}
