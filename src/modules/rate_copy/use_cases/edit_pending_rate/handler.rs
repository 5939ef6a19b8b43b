use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::rate_copy::core::session::Session;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditPendingRateError {
    #[error("no pending batch to edit")]
    NothingPending,
}

/// Applies a user's amount override to one pending operation. Amount
/// validation is soft: anything that does not parse as a finite,
/// non-negative decimal leaves the stored amount untouched.
pub struct EditPendingRateHandler {
    session: Arc<Mutex<Session>>,
}

impl EditPendingRateHandler {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    /// Returns the operation's amount after the edit, or `None` when the
    /// index matches no operation.
    pub async fn handle(
        &self,
        index: usize,
        raw_amount: &str,
    ) -> Result<Option<f64>, EditPendingRateError> {
        let mut session = self.session.lock().await;
        let pending = session
            .pending_mut()
            .ok_or(EditPendingRateError::NothingPending)?;
        pending.update_rate(index, raw_amount);
        Ok(pending
            .operations()
            .get(index)
            .map(|operation| operation.rate_amount))
    }
}
