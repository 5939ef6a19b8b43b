use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::rate_copy::core::calendar::date_range;
use crate::modules::rate_copy::core::operation::CopyOperation;
use crate::modules::rate_copy::core::session::{Credentials, Session};
use crate::modules::rate_copy::ports::UpstreamRates;
use crate::modules::rate_copy::use_cases::build_preview::command::RangeSelection;
use crate::modules::rate_copy::use_cases::build_preview::plan::{
    FetchedRate, expand_fetched, expand_grid, normalize_years,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildPreviewError {
    #[error("bearer token and property ID are required")]
    NotAuthenticated,

    #[error("select at least one room type")]
    NoRoomTypes,

    #[error("select at least one target year")]
    NoTargetYears,

    #[error("no selection grid has been loaded")]
    NoGridLoaded,
}

/// A build either replaces the pending batch or finds nothing to copy; the
/// empty case is informational and leaves any existing batch untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltPreview {
    Preview {
        id: Uuid,
        operations: Vec<CopyOperation>,
        room_names: HashMap<String, String>,
    },
    NothingToCopy,
}

pub struct BuildPreviewHandler {
    session: Arc<Mutex<Session>>,
    upstream: Arc<dyn UpstreamRates>,
}

impl BuildPreviewHandler {
    pub fn new(session: Arc<Mutex<Session>>, upstream: Arc<dyn UpstreamRates>) -> Self {
        Self { session, upstream }
    }

    /// Basic mode: validates the selection, fetches each (room type, date)
    /// rate sequentially, then expands into the pending batch. Validation
    /// happens before the first upstream call.
    pub async fn handle_range(
        &self,
        selection: RangeSelection,
    ) -> Result<BuiltPreview, BuildPreviewError> {
        if selection.room_type_ids.is_empty() {
            return Err(BuildPreviewError::NoRoomTypes);
        }
        if selection.target_years.is_empty() {
            return Err(BuildPreviewError::NoTargetYears);
        }
        let credentials = self.credentials().await?;

        let dates = date_range(selection.from, selection.to);
        let mut fetched = Vec::new();
        for room_type_id in &selection.room_type_ids {
            for &date in &dates {
                match self.upstream.rate(&credentials, room_type_id, date).await {
                    Ok(Some(data)) => fetched.push(FetchedRate {
                        room_type_id: room_type_id.clone(),
                        date,
                        data,
                    }),
                    Ok(None) => {}
                    Err(error) => {
                        // A failed lookup counts as "no rate for this pair".
                        tracing::warn!(%room_type_id, %date, %error, "rate fetch failed, skipping");
                    }
                }
            }
        }

        let years = normalize_years(&selection.target_years);
        self.store(expand_fetched(&fetched, &years)).await
    }

    /// Advanced mode: expands the session's selection grid. Pure; the grid
    /// already carries every rate it needs.
    pub async fn handle_grid(&self) -> Result<BuiltPreview, BuildPreviewError> {
        let mut session = self.session.lock().await;
        if session.credentials.is_none() {
            return Err(BuildPreviewError::NotAuthenticated);
        }
        let grid = session.grid.as_ref().ok_or(BuildPreviewError::NoGridLoaded)?;
        let operations = expand_grid(grid);
        if operations.is_empty() {
            return Ok(BuiltPreview::NothingToCopy);
        }
        let pending = session.create_preview(operations);
        let (id, operations) = (pending.id, pending.operations().to_vec());
        Ok(BuiltPreview::Preview {
            id,
            operations,
            room_names: room_names(&session),
        })
    }

    async fn credentials(&self) -> Result<Credentials, BuildPreviewError> {
        self.session
            .lock()
            .await
            .credentials
            .clone()
            .ok_or(BuildPreviewError::NotAuthenticated)
    }

    async fn store(
        &self,
        operations: Vec<CopyOperation>,
    ) -> Result<BuiltPreview, BuildPreviewError> {
        if operations.is_empty() {
            return Ok(BuiltPreview::NothingToCopy);
        }
        let mut session = self.session.lock().await;
        let pending = session.create_preview(operations);
        let (id, operations) = (pending.id, pending.operations().to_vec());
        Ok(BuiltPreview::Preview {
            id,
            operations,
            room_names: room_names(&session),
        })
    }
}

fn room_names(session: &Session) -> HashMap<String, String> {
    session
        .room_types
        .iter()
        .map(|room| (room.room_type_id.clone(), room.room_type_name.clone()))
        .collect()
}
