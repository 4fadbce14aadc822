use std::time::Duration;

use anyhow::Context;
use folio_models::contact::{FormRecord, SubmissionOutcome};
use folio_submit_contracts::SubmitService;
use tracing::{info, instrument};

/// Stand-in transport that only logs the record after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitService {
    config: SimulatedSubmitServiceConfig,
}

#[derive(Debug, Clone)]
pub struct SimulatedSubmitServiceConfig {
    pub delay: Duration,
    pub simulate_failure: bool,
}

impl SimulatedSubmitService {
    pub fn new(config: SimulatedSubmitServiceConfig) -> Self {
        Self { config }
    }
}

impl SubmitService for SimulatedSubmitService {
    #[instrument(skip_all)]
    async fn submit(&self, record: FormRecord) -> anyhow::Result<SubmissionOutcome> {
        tokio::time::sleep(self.config.delay).await;

        let data = serde_json::to_string(&record).context("Failed to serialize form record")?;
        info!(%data, "simulated form submission");

        Ok(if self.config.simulate_failure {
            SubmissionOutcome::Failure {
                reason: "simulated failure".into(),
            }
        } else {
            SubmissionOutcome::Success
        })
    }
}
