use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::rate_copy::core::calendar::is_weekend;
use crate::modules::rate_copy::use_cases::load_selection_grid::handler::{
    GridSelection, LoadedGrid,
};
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    #[serde(rename = "roomTypeID")]
    pub room_type_id: String,
    pub room_type_name: String,
    pub date: NaiveDate,
    pub day: String,
    pub weekend: bool,
    pub rate_amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    pub rows: Vec<GridRow>,
    pub selection_count: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<GridSelection>, JsonRejection>,
) -> impl IntoResponse {
    let Json(selection) = match body {
        Ok(body) => body,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.grid_loader.handle(selection).await {
        Ok(loaded) => Json(grid_response(loaded)).into_response(),
        Err(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
    }
}

fn grid_response(loaded: LoadedGrid) -> GridResponse {
    let rows = loaded
        .grid
        .rooms()
        .iter()
        .flat_map(|room| {
            let name = loaded
                .room_names
                .get(&room.room_type_id)
                .cloned()
                .unwrap_or_else(|| room.room_type_id.clone());
            room.dates.iter().map(move |(date, cell)| GridRow {
                room_type_id: room.room_type_id.clone(),
                room_type_name: name.clone(),
                date: *date,
                day: date.format("%a").to_string(),
                weekend: is_weekend(*date),
                rate_amount: cell.amount,
            })
        })
        .collect();
    GridResponse {
        rows,
        selection_count: loaded.grid.selection_count(),
    }
}
