use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::rate_copy::use_cases::build_preview::inbound::http as preview_http;
use crate::modules::rate_copy::use_cases::dismiss_preview::inbound::http as dismiss_http;
use crate::modules::rate_copy::use_cases::edit_pending_rate::inbound::http as edit_rate_http;
use crate::modules::rate_copy::use_cases::edit_selection_grid::inbound::http as grid_edit_http;
use crate::modules::rate_copy::use_cases::load_room_types::inbound::http as room_types_http;
use crate::modules::rate_copy::use_cases::load_selection_grid::inbound::http as grid_http;
use crate::modules::rate_copy::use_cases::submit_batch::inbound::http as submit_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/room-types", get(room_types_http::handle))
        .route("/grid", post(grid_http::handle))
        .route("/grid/cells", post(grid_edit_http::toggle))
        .route("/grid/selection", post(grid_edit_http::bulk))
        .route("/grid/pointer", post(grid_edit_http::pointer))
        .route("/preview/range", post(preview_http::range))
        .route("/preview/grid", post(preview_http::grid))
        .route("/preview/rates/{index}", patch(edit_rate_http::handle))
        .route("/preview/dismiss", post(dismiss_http::handle))
        .route("/preview/submit", post(submit_http::handle))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
