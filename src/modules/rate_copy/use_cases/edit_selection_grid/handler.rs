use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::rate_copy::core::session::Session;
use crate::modules::rate_copy::use_cases::edit_selection_grid::command::{
    BulkMode, PointerAction, ToggleCell,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditSelectionGridError {
    #[error("no selection grid has been loaded")]
    NoGridLoaded,
}

/// Mutates the session's selection grid: direct toggles, bulk operators,
/// and the drag-to-select pointer machine. Every call answers with the
/// grid's new selection count.
pub struct EditSelectionGridHandler {
    session: Arc<Mutex<Session>>,
}

impl EditSelectionGridHandler {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    /// Toggles one cell. A reference to a checkbox that does not exist is
    /// ignored, same as the grid itself does.
    pub async fn toggle(&self, command: ToggleCell) -> Result<usize, EditSelectionGridError> {
        let mut session = self.session.lock().await;
        let grid = session.grid.as_mut().ok_or(EditSelectionGridError::NoGridLoaded)?;
        grid.set(&command.cell, command.selected);
        Ok(grid.selection_count())
    }

    pub async fn bulk(&self, mode: BulkMode) -> Result<usize, EditSelectionGridError> {
        let mut session = self.session.lock().await;
        let grid = session.grid.as_mut().ok_or(EditSelectionGridError::NoGridLoaded)?;
        match mode {
            BulkMode::All => grid.select_all(),
            BulkMode::None => grid.clear_all(),
            BulkMode::Weekends => grid.select_weekends(),
            BulkMode::Weekdays => grid.select_weekdays(),
        }
        Ok(grid.selection_count())
    }

    pub async fn pointer(&self, action: PointerAction) -> Result<usize, EditSelectionGridError> {
        let mut guard = self.session.lock().await;
        let session = &mut *guard;
        let drag = &mut session.drag;
        let grid = session
            .grid
            .as_mut()
            .ok_or(EditSelectionGridError::NoGridLoaded)?;
        match action {
            // Pressing a checkbox that does not exist starts nothing,
            // mirroring a disabled checkbox on the interactive surface.
            PointerAction::Down { cell } => {
                if grid.contains(&cell) {
                    let paint = drag.pointer_down(grid.is_selected(&cell));
                    grid.set(&cell, paint);
                }
            }
            PointerAction::Enter { cell } => {
                if let Some(paint) = drag.pointer_enter() {
                    grid.set(&cell, paint);
                }
            }
            PointerAction::Up => drag.pointer_up(),
        }
        Ok(grid.selection_count())
    }
}
