use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::rate_copy::core::calendar::date_range;
use crate::modules::rate_copy::core::drag::DragSelect;
use crate::modules::rate_copy::core::grid::SelectionGrid;
use crate::modules::rate_copy::core::session::Session;
use crate::modules::rate_copy::ports::UpstreamRates;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridSelection {
    #[serde(rename = "roomTypeIDs")]
    pub room_type_ids: Vec<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadSelectionGridError {
    #[error("bearer token and property ID are required")]
    NotAuthenticated,

    #[error("select at least one room type")]
    NoRoomTypes,
}

/// The freshly loaded grid plus the names needed to label its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGrid {
    pub grid: SelectionGrid,
    pub room_names: HashMap<String, String>,
}

/// Rebuilds the advanced-mode selection grid: one sequential rate lookup
/// per (room type, date), cells only where a rate exists, all year flags
/// cleared. Replaces whatever grid the session held before.
pub struct LoadSelectionGridHandler {
    session: Arc<Mutex<Session>>,
    upstream: Arc<dyn UpstreamRates>,
}

impl LoadSelectionGridHandler {
    pub fn new(session: Arc<Mutex<Session>>, upstream: Arc<dyn UpstreamRates>) -> Self {
        Self { session, upstream }
    }

    pub async fn handle(
        &self,
        selection: GridSelection,
    ) -> Result<LoadedGrid, LoadSelectionGridError> {
        if selection.room_type_ids.is_empty() {
            return Err(LoadSelectionGridError::NoRoomTypes);
        }
        let credentials = self
            .session
            .lock()
            .await
            .credentials
            .clone()
            .ok_or(LoadSelectionGridError::NotAuthenticated)?;

        let dates = date_range(selection.from, selection.to);
        let mut grid = SelectionGrid::new();
        for room_type_id in &selection.room_type_ids {
            for &date in &dates {
                match self.upstream.rate(&credentials, room_type_id, date).await {
                    Ok(Some(data)) => grid.insert_rate(room_type_id, date, data),
                    Ok(None) => {}
                    Err(error) => {
                        tracing::warn!(%room_type_id, %date, %error, "rate fetch failed, skipping");
                    }
                }
            }
        }

        let mut session = self.session.lock().await;
        session.grid = Some(grid.clone());
        session.drag = DragSelect::Idle;
        let room_names = session
            .room_types
            .iter()
            .map(|room| (room.room_type_id.clone(), room.room_type_name.clone()))
            .collect();
        Ok(LoadedGrid { grid, room_names })
    }
}
