use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use folio_core_contact_contracts::presenter::ContactFormPresenter;
use folio_models::contact::{
    FieldName, FormMessage, FormMessageId, FormMessageKind, ValidationResult,
};
use folio_view_contracts::FormView;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct ContactFormPresenterImpl<View> {
    view: Arc<View>,
    config: ContactFormPresenterConfig,
    next_message_id: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct ContactFormPresenterConfig {
    /// How long a form-level message stays visible.
    pub message_ttl: Duration,
}

impl<View> ContactFormPresenterImpl<View> {
    pub fn new(view: Arc<View>, config: ContactFormPresenterConfig) -> Self {
        Self {
            view,
            config,
            next_message_id: Default::default(),
        }
    }
}

impl<View> ContactFormPresenter for ContactFormPresenterImpl<View>
where
    View: FormView,
{
    fn show_field_error(&self, field: FieldName, error: Option<String>) {
        self.view
            .set_field_error(field, error.filter(|e| !e.is_empty()));
    }

    fn show_field_errors(&self, result: &ValidationResult) {
        for field in FieldName::ALL {
            self.show_field_error(field, result.error(field).map(Into::into));
        }
    }

    fn show_form_message(&self, text: String, kind: FormMessageKind) {
        let id = FormMessageId(self.next_message_id.fetch_add(1, Ordering::Relaxed));
        self.view
            .set_form_message(Some(FormMessage { id, text, kind }));

        let view = Arc::clone(&self.view);
        let ttl = self.config.message_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if view.clear_form_message(id) {
                trace!(?id, "form message expired");
            }
        });
    }
}
