use std::future::Future;

use folio_models::contact::{FormRecord, SubmissionOutcome};

/// Transmits a contact form record to a backend or third-party service.
///
/// Invoked exactly once per submission attempt. Errors are treated like a
/// [`SubmissionOutcome::Failure`] by the caller.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmitService: Send + Sync + 'static {
    fn submit(
        &self,
        record: FormRecord,
    ) -> impl Future<Output = anyhow::Result<SubmissionOutcome>> + Send;
}

#[cfg(feature = "mock")]
impl MockSubmitService {
    pub fn with_submit(
        mut self,
        record: FormRecord,
        result: anyhow::Result<SubmissionOutcome>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
