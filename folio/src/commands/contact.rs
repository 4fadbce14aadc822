use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitResult};
use folio_models::contact::FieldName;
use folio_view_impl::FormViewState;
use serde::Serialize;

use super::print_json;
use crate::environment::ContactEnvironment;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Validate a single field value, as when the control loses focus
    #[command(aliases(["v"]))]
    Validate {
        /// One of name, email, subject, message
        field: FieldName,
        value: String,
    },
    /// Fill in the contact form and submit it
    #[command(aliases(["s"]))]
    Submit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
        /// Make the simulated transport report a failure
        #[arg(long)]
        simulate_failure: bool,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Validate { field, value } => validate(config, field, value),
            ContactCommand::Submit {
                name,
                email,
                subject,
                message,
                simulate_failure,
            } => {
                let values = [
                    (FieldName::Name, name),
                    (FieldName::Email, email),
                    (FieldName::Subject, subject),
                    (FieldName::Message, message),
                ];
                submit(config, values, simulate_failure).await
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidateReport {
    field: FieldName,
    error: Option<String>,
}

fn validate(config: Config, field: FieldName, value: String) -> anyhow::Result<()> {
    let env = ContactEnvironment::new(&config);
    env.view.set_field_value(field, value);

    let error = env.feature.validate_field(field);

    print_json(&ValidateReport { field, error })
}

#[derive(Debug, Serialize)]
pub struct SubmitReport {
    pub result: &'static str,
    pub view: FormViewState,
}

pub async fn run_submit(
    env: &ContactEnvironment,
    values: impl IntoIterator<Item = (FieldName, String)>,
) -> SubmitReport {
    for (field, value) in values {
        env.view.set_field_value(field, value);
    }

    let result = match env.feature.submit().await {
        ContactSubmitResult::Invalid(_) => "invalid",
        ContactSubmitResult::Sent => "sent",
        ContactSubmitResult::Failed => "failed",
        ContactSubmitResult::Busy => "busy",
    };

    SubmitReport {
        result,
        view: env.view.snapshot(),
    }
}

async fn submit(
    mut config: Config,
    values: [(FieldName, String); 4],
    simulate_failure: bool,
) -> anyhow::Result<()> {
    config.submit.simulate_failure |= simulate_failure;
    let env = ContactEnvironment::new(&config);

    let report = run_submit(&env, values).await;

    print_json(&report)
}
