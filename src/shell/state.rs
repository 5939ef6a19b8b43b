use std::sync::Arc;

use tokio::sync::Mutex;

use crate::modules::rate_copy::core::session::Session;
use crate::modules::rate_copy::ports::UpstreamRates;
use crate::modules::rate_copy::use_cases::build_preview::handler::BuildPreviewHandler;
use crate::modules::rate_copy::use_cases::dismiss_preview::handler::DismissPreviewHandler;
use crate::modules::rate_copy::use_cases::edit_pending_rate::handler::EditPendingRateHandler;
use crate::modules::rate_copy::use_cases::edit_selection_grid::handler::EditSelectionGridHandler;
use crate::modules::rate_copy::use_cases::load_room_types::handler::LoadRoomTypesHandler;
use crate::modules::rate_copy::use_cases::load_selection_grid::handler::LoadSelectionGridHandler;
use crate::modules::rate_copy::use_cases::submit_batch::handler::SubmitBatchHandler;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub room_types: Arc<LoadRoomTypesHandler>,
    pub grid_loader: Arc<LoadSelectionGridHandler>,
    pub grid_editor: Arc<EditSelectionGridHandler>,
    pub preview_builder: Arc<BuildPreviewHandler>,
    pub rate_editor: Arc<EditPendingRateHandler>,
    pub preview_dismisser: Arc<DismissPreviewHandler>,
    pub submitter: Arc<SubmitBatchHandler>,
}

impl AppState {
    /// Wires every use case to one shared session and the given upstream.
    pub fn new(upstream: Arc<dyn UpstreamRates>) -> Self {
        let session = Arc::new(Mutex::new(Session::new()));
        Self {
            room_types: Arc::new(LoadRoomTypesHandler::new(session.clone(), upstream.clone())),
            grid_loader: Arc::new(LoadSelectionGridHandler::new(
                session.clone(),
                upstream.clone(),
            )),
            grid_editor: Arc::new(EditSelectionGridHandler::new(session.clone())),
            preview_builder: Arc::new(BuildPreviewHandler::new(session.clone(), upstream.clone())),
            rate_editor: Arc::new(EditPendingRateHandler::new(session.clone())),
            preview_dismisser: Arc::new(DismissPreviewHandler::new(session.clone())),
            submitter: Arc::new(SubmitBatchHandler::new(session.clone(), upstream)),
            session,
        }
    }
}
