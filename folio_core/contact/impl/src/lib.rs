use std::{
    panic::AssertUnwindSafe,
    sync::{Arc, Mutex},
};

use folio_core_contact_contracts::{
    presenter::ContactFormPresenter, validation::ContactFormValidationService,
    ContactFeatureService, ContactFormState, ContactSubmitResult,
};
use folio_models::contact::{FieldName, FormMessageKind, SubmissionOutcome, SubmitControl};
use folio_submit_contracts::SubmitService;
use folio_utils::LockExt;
use folio_view_contracts::FormView;
use futures::FutureExt;
use tracing::{debug, error, instrument, warn};

pub mod presenter;
pub mod record;
pub mod validation;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<View, Validation, Presenter, Submit> {
    view: Arc<View>,
    validation: Validation,
    presenter: Presenter,
    submit: Submit,
    config: ContactFeatureConfig,
    state: Arc<Mutex<ContactFormState>>,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Label of the submit control while a submission is in flight.
    pub busy_label: String,
    pub success_message: String,
    pub failure_message: String,
}

impl<View, Validation, Presenter, Submit>
    ContactFeatureServiceImpl<View, Validation, Presenter, Submit>
{
    pub fn new(
        view: Arc<View>,
        validation: Validation,
        presenter: Presenter,
        submit: Submit,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            view,
            validation,
            presenter,
            submit,
            config,
            state: Default::default(),
        }
    }

    fn set_state(&self, state: ContactFormState) {
        *self.state.lock_state() = state;
    }
}

impl<View: FormView, Validation, Presenter, Submit>
    ContactFeatureServiceImpl<View, Validation, Presenter, Submit>
{
    /// Move from `Idle` to `Validating` as a single step. Returns `false` if
    /// another attempt owns the form or the submit control is disabled.
    fn try_begin(&self) -> bool {
        let mut state = self.state.lock_state();
        if *state != ContactFormState::Idle || self.view.submit_control().disabled {
            return false;
        }
        *state = ContactFormState::Validating;
        true
    }
}

impl<View, Validation, Presenter, Submit> ContactFeatureService
    for ContactFeatureServiceImpl<View, Validation, Presenter, Submit>
where
    View: FormView,
    Validation: ContactFormValidationService,
    Presenter: ContactFormPresenter,
    Submit: SubmitService,
{
    #[instrument(skip(self))]
    fn validate_field(&self, field: FieldName) -> Option<String> {
        let value = self.view.field_value(field).unwrap_or_else(|| {
            warn!("form has no control for field");
            String::new()
        });

        let error = self.validation.validate(field, &value);
        self.presenter.show_field_error(field, error.clone());
        error
    }

    fn clear_field_error(&self, field: FieldName) {
        self.presenter.show_field_error(field, None);
    }

    #[instrument(skip(self))]
    async fn submit(&self) -> ContactSubmitResult {
        if !self.try_begin() {
            debug!("submission already in flight");
            return ContactSubmitResult::Busy;
        }

        let record = record::collect(&*self.view);
        let result = self.validation.validate_all(&record);
        self.presenter.show_field_errors(&result);

        if !result.is_submittable() {
            debug!(errors = result.errors().count(), "form is invalid");
            self.set_state(ContactFormState::Idle);
            return ContactSubmitResult::Invalid(result);
        }

        let outcome = {
            let _busy = BusyGuard::acquire(&*self.view, &self.state, &self.config.busy_label);
            AssertUnwindSafe(self.submit.submit(record))
                .catch_unwind()
                .await
        };

        let sent = match outcome {
            Ok(Ok(SubmissionOutcome::Success)) => true,
            Ok(Ok(SubmissionOutcome::Failure { reason })) => {
                error!(%reason, "form submission was rejected");
                false
            }
            Ok(Err(err)) => {
                error!("Failed to submit form: {err:#}");
                false
            }
            Err(_) => {
                error!("form submission panicked");
                false
            }
        };

        if sent {
            self.presenter.show_form_message(
                self.config.success_message.clone(),
                FormMessageKind::Success,
            );
            self.view.reset_fields();
            ContactSubmitResult::Sent
        } else {
            self.presenter.show_form_message(
                self.config.failure_message.clone(),
                FormMessageKind::Failure,
            );
            ContactSubmitResult::Failed
        }
    }

    fn state(&self) -> ContactFormState {
        *self.state.lock_state()
    }
}

/// Holds the submit control in its busy state. Dropping the guard restores
/// the original control and returns the form to [`ContactFormState::Idle`].
struct BusyGuard<'a, View: FormView> {
    view: &'a View,
    state: &'a Mutex<ContactFormState>,
    label: String,
}

impl<'a, View: FormView> BusyGuard<'a, View> {
    fn acquire(view: &'a View, state: &'a Mutex<ContactFormState>, busy_label: &str) -> Self {
        let original = view.submit_control();
        view.set_submit_control(SubmitControl {
            label: busy_label.into(),
            disabled: true,
        });
        *state.lock_state() = ContactFormState::Submitting;

        Self {
            view,
            state,
            label: original.label,
        }
    }
}

impl<View: FormView> Drop for BusyGuard<'_, View> {
    fn drop(&mut self) {
        self.view
            .set_submit_control(SubmitControl::enabled(std::mem::take(&mut self.label)));
        *self.state.lock_state() = ContactFormState::Idle;
    }
}
