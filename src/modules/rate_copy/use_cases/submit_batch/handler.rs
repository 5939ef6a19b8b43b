use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::rate_copy::core::operation::{CopyOperation, OperationResult};
use crate::modules::rate_copy::core::session::{Credentials, Session};
use crate::modules::rate_copy::ports::{
    CopyRateRequest, CopyRateResponse, UpstreamError, UpstreamRates,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitBatchError {
    #[error("bearer token and property ID are required")]
    NotAuthenticated,

    #[error("no operations to submit")]
    NothingPending,

    #[error("a submission is already running")]
    AlreadyRunning,
}

/// Executes the pending batch against the upstream API, one operation at a
/// time, and reports one result per operation without ever aborting the
/// batch on an individual failure.
pub struct SubmitBatchHandler {
    session: Arc<Mutex<Session>>,
    upstream: Arc<dyn UpstreamRates>,
}

impl SubmitBatchHandler {
    pub fn new(session: Arc<Mutex<Session>>, upstream: Arc<dyn UpstreamRates>) -> Self {
        Self { session, upstream }
    }

    pub async fn handle(&self) -> Result<Vec<OperationResult>, SubmitBatchError> {
        let (credentials, batch_id, operations) = {
            let mut session = self.session.lock().await;
            let credentials = session
                .credentials
                .clone()
                .ok_or(SubmitBatchError::NotAuthenticated)?;
            if session.submitting {
                return Err(SubmitBatchError::AlreadyRunning);
            }
            let pending = session.pending().ok_or(SubmitBatchError::NothingPending)?;
            if pending.operations().is_empty() {
                return Err(SubmitBatchError::NothingPending);
            }
            let (batch_id, operations) = (pending.id, pending.operations().to_vec());
            session.submitting = true;
            (credentials, batch_id, operations)
        };

        let results = self.execute(&credentials, &operations).await;

        let mut session = self.session.lock().await;
        session.submitting = false;
        // A preview created mid-submission is a new batch and must survive
        // the clear.
        if session.pending().is_some_and(|pending| pending.id == batch_id) {
            session.clear_pending();
        }

        let succeeded = results.iter().filter(|result| result.success).count();
        tracing::info!(total = results.len(), succeeded, "batch submitted");
        Ok(results)
    }

    async fn execute(
        &self,
        credentials: &Credentials,
        operations: &[CopyOperation],
    ) -> Vec<OperationResult> {
        let mut results = Vec::with_capacity(operations.len());
        for operation in operations {
            let request = CopyRateRequest::for_operation(&credentials.property_id, operation);
            let outcome = self.upstream.copy_rate(credentials, request).await;
            let result = result_for(operation, outcome);
            if !result.success {
                tracing::warn!(
                    target_date = %result.date,
                    error = result.error.as_deref().unwrap_or_default(),
                    "copy failed"
                );
            }
            results.push(result);
        }
        results
    }
}

/// One upstream outcome mapped to one result. A success body with at least
/// one result yields that first result verbatim; every other shape becomes
/// a synthetic failure carrying the target date and year.
fn result_for(
    operation: &CopyOperation,
    outcome: Result<CopyRateResponse, UpstreamError>,
) -> OperationResult {
    match outcome {
        Ok(response) if response.success => match response.results.into_iter().next() {
            Some(first) => first,
            None => OperationResult::failure(operation, "Unknown error"),
        },
        Ok(response) => OperationResult::failure(
            operation,
            response.error.unwrap_or_else(|| "Unknown error".into()),
        ),
        Err(error) => OperationResult::failure(operation, error.to_string()),
    }
}
