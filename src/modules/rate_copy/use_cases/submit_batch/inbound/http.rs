use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::rate_copy::core::operation::OperationResult;
use crate::modules::rate_copy::use_cases::submit_batch::handler::SubmitBatchError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub summary: String,
    pub results: Vec<OperationResult>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.submitter.handle().await {
        Ok(results) => {
            let succeeded = results.iter().filter(|result| result.success).count();
            Json(SubmitResponse {
                summary: format!("{succeeded}/{} successful", results.len()),
                results,
            })
            .into_response()
        }
        Err(error @ SubmitBatchError::AlreadyRunning) => {
            (StatusCode::CONFLICT, error.to_string()).into_response()
        }
        Err(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
    }
}
