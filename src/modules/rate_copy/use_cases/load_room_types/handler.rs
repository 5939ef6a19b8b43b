use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::rate_copy::core::session::{Credentials, RoomType, Session};
use crate::modules::rate_copy::ports::{UpstreamError, UpstreamRates};

#[derive(Debug, Error)]
pub enum LoadRoomTypesError {
    #[error("bearer token and property ID are required")]
    MissingCredentials,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Loads the property's room types and binds the session to the supplied
/// credentials. This is the entry point of every session: everything after
/// it reuses the captured property ID and token.
pub struct LoadRoomTypesHandler {
    session: Arc<Mutex<Session>>,
    upstream: Arc<dyn UpstreamRates>,
}

impl LoadRoomTypesHandler {
    pub fn new(session: Arc<Mutex<Session>>, upstream: Arc<dyn UpstreamRates>) -> Self {
        Self { session, upstream }
    }

    pub async fn handle(
        &self,
        property_id: &str,
        token: &str,
    ) -> Result<Vec<RoomType>, LoadRoomTypesError> {
        let property_id = property_id.trim();
        let token = token.trim();
        if property_id.is_empty() || token.is_empty() {
            return Err(LoadRoomTypesError::MissingCredentials);
        }

        let credentials = Credentials {
            property_id: property_id.to_string(),
            token: token.to_string(),
        };
        let room_types = self.upstream.room_types(&credentials).await?;
        tracing::info!(property_id, count = room_types.len(), "room types loaded");

        self.session
            .lock()
            .await
            .authenticate(credentials, room_types.clone());
        Ok(room_types)
    }
}
