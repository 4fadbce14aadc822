use std::{sync::Arc, time::Duration};

use folio_demo::{BUSY_LABEL, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use folio_submit_contracts::MockSubmitService;
use folio_view_impl::FormViewStateImpl;

use crate::{
    presenter::{ContactFormPresenterConfig, ContactFormPresenterImpl},
    validation::ContactFormValidationServiceImpl,
    ContactFeatureConfig, ContactFeatureServiceImpl,
};


type Sut<View = FormViewStateImpl> = ContactFeatureServiceImpl<
    View,
    ContactFormValidationServiceImpl,
    ContactFormPresenterImpl<View>,
    MockSubmitService,
>;

fn make_sut<View>(view: Arc<View>, submit: MockSubmitService) -> Sut<View> {
    let presenter = ContactFormPresenterImpl::new(
        Arc::clone(&view),
        ContactFormPresenterConfig {
            message_ttl: Duration::from_secs(5),
        },
    );

    ContactFeatureServiceImpl::new(
        view,
        ContactFormValidationServiceImpl,
        presenter,
        submit,
        ContactFeatureConfig {
            busy_label: BUSY_LABEL.into(),
            success_message: SUCCESS_MESSAGE.into(),
            failure_message: FAILURE_MESSAGE.into(),
        },
    )
}
