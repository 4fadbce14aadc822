use std::sync::Arc;

use folio_config::Config;
use folio_core_contact_impl::{
    presenter::{ContactFormPresenterConfig, ContactFormPresenterImpl},
    validation::ContactFormValidationServiceImpl,
    ContactFeatureConfig, ContactFeatureServiceImpl,
};
use folio_core_page_impl::{PageFeatureConfig, PageFeatureServiceImpl};
use folio_submit_impl::{SimulatedSubmitService, SimulatedSubmitServiceConfig};
use folio_view_impl::FormViewStateImpl;

pub type View = FormViewStateImpl;
pub type Submit = SimulatedSubmitService;
pub type ContactFeature = ContactFeatureServiceImpl<
    View,
    ContactFormValidationServiceImpl,
    ContactFormPresenterImpl<View>,
    Submit,
>;

/// The contact form services bound to one form view.
#[derive(Debug, Clone)]
pub struct ContactEnvironment {
    pub view: Arc<View>,
    pub feature: ContactFeature,
}

impl ContactEnvironment {
    pub fn new(config: &Config) -> Self {
        let view = Arc::new(FormViewStateImpl::new(&config.contact.submit_label));

        let presenter = ContactFormPresenterImpl::new(
            Arc::clone(&view),
            ContactFormPresenterConfig {
                message_ttl: config.contact.message_ttl.into(),
            },
        );

        let submit = SimulatedSubmitService::new(SimulatedSubmitServiceConfig {
            delay: config.submit.simulated_delay.into(),
            simulate_failure: config.submit.simulate_failure,
        });

        let feature = ContactFeatureServiceImpl::new(
            Arc::clone(&view),
            ContactFormValidationServiceImpl,
            presenter,
            submit,
            ContactFeatureConfig {
                busy_label: config.contact.busy_label.clone(),
                success_message: config.contact.success_message.clone(),
                failure_message: config.contact.failure_message.clone(),
            },
        );

        Self { view, feature }
    }
}

pub fn page_feature(config: &Config) -> PageFeatureServiceImpl {
    let page = &config.page;
    PageFeatureServiceImpl::new(PageFeatureConfig {
        navbar_scroll_offset: page.navbar_scroll_offset,
        back_to_top_offset: page.back_to_top_offset,
        active_section_offset: page.active_section_offset,
        navbar_height: page.navbar_height,
        viewport_threshold: page.viewport_threshold,
        animation_delay: page.animation_delay.into(),
        skill_bar_stagger: page.skill_bar_stagger.into(),
        scroll_throttle: page.scroll_throttle.into(),
    })
}
