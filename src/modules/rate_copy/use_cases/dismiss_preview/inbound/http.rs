use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    state.preview_dismisser.handle().await;
    StatusCode::NO_CONTENT
}
