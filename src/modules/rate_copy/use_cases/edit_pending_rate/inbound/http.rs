use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shell::state::AppState;

/// Rate edits arrive either as a number or as the raw text of an input
/// field; both go through the same soft validation.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    fn as_raw(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct EditRateBody {
    pub amount: AmountInput,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditedRateResponse {
    pub rate_amount: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    body: Result<Json<EditRateBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(body) => body,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.rate_editor.handle(index, &body.amount.as_raw()).await {
        Ok(Some(rate_amount)) => Json(EditedRateResponse { rate_amount }).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
    }
}
