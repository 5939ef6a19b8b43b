use std::sync::Arc;

use tokio::sync::Mutex;

use crate::modules::rate_copy::core::session::Session;

/// Closes the preview surface. The pending batch survives on purpose: the
/// user can dismiss, reconsider, and still submit what was built.
pub struct DismissPreviewHandler {
    session: Arc<Mutex<Session>>,
}

impl DismissPreviewHandler {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    pub async fn handle(&self) {
        self.session.lock().await.dismiss_preview();
    }
}
