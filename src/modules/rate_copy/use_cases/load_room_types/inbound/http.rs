use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::rate_copy::use_cases::load_room_types::handler::LoadRoomTypesError;
use crate::shell::state::AppState;

pub const BEARER_HEADER: &str = "X-Bearer-Token";

#[derive(Deserialize)]
pub struct RoomTypesParams {
    #[serde(rename = "propertyID")]
    pub property_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<RoomTypesParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let token = headers
        .get(BEARER_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    match state.room_types.handle(&params.property_id, token).await {
        Ok(room_types) => Json(room_types).into_response(),
        Err(error @ LoadRoomTypesError::MissingCredentials) => {
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        Err(error @ LoadRoomTypesError::Upstream(_)) => {
            (StatusCode::BAD_GATEWAY, error.to_string()).into_response()
        }
    }
}
