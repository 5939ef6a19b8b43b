use std::collections::HashMap;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::rate_copy::core::calendar::is_weekend;
use crate::modules::rate_copy::core::operation::CopyOperation;
use crate::modules::rate_copy::use_cases::build_preview::command::RangeSelection;
use crate::modules::rate_copy::use_cases::build_preview::handler::BuiltPreview;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    pub index: usize,
    #[serde(rename = "roomTypeID")]
    pub room_type_id: String,
    pub room_type_name: String,
    pub source_date: NaiveDate,
    pub source_day: String,
    pub source_weekend: bool,
    pub target_date: NaiveDate,
    pub target_day: String,
    pub target_weekend: bool,
    pub target_year: i32,
    pub rate_amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    #[serde(rename = "previewID")]
    pub preview_id: Uuid,
    pub summary: String,
    pub operations: Vec<PreviewRow>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn range(
    State(state): State<AppState>,
    body: Result<Json<RangeSelection>, JsonRejection>,
) -> impl IntoResponse {
    let Json(selection) = match body {
        Ok(body) => body,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.preview_builder.handle_range(selection).await {
        Ok(built) => respond(built, "No rates found to copy"),
        Err(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
    }
}

pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    match state.preview_builder.handle_grid().await {
        Ok(built) => respond(built, "No rates selected"),
        Err(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
    }
}

fn respond(built: BuiltPreview, empty_message: &'static str) -> axum::response::Response {
    match built {
        BuiltPreview::Preview {
            id,
            operations,
            room_names,
        } => {
            let summary = format!(
                "Ready to copy {} rate(s). Review and edit rates below before submitting.",
                operations.len()
            );
            let operations = operations
                .iter()
                .enumerate()
                .map(|(index, operation)| preview_row(index, operation, &room_names))
                .collect();
            Json(PreviewResponse {
                preview_id: id,
                summary,
                operations,
            })
            .into_response()
        }
        BuiltPreview::NothingToCopy => Json(MessageResponse {
            message: empty_message,
        })
        .into_response(),
    }
}

fn preview_row(
    index: usize,
    operation: &CopyOperation,
    room_names: &HashMap<String, String>,
) -> PreviewRow {
    PreviewRow {
        index,
        room_type_id: operation.room_type_id.clone(),
        room_type_name: room_names
            .get(&operation.room_type_id)
            .cloned()
            .unwrap_or_else(|| operation.room_type_id.clone()),
        source_date: operation.source_date,
        source_day: operation.source_date.format("%a").to_string(),
        source_weekend: is_weekend(operation.source_date),
        target_date: operation.target_date,
        target_day: operation.target_date.format("%a").to_string(),
        target_weekend: is_weekend(operation.target_date),
        target_year: operation.target_year,
        rate_amount: operation.rate_amount,
    }
}
