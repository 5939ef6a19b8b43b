use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::rate_copy::use_cases::edit_selection_grid::command::{
    BulkMode, PointerAction, ToggleCell,
};
use crate::modules::rate_copy::use_cases::edit_selection_grid::handler::EditSelectionGridError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct BulkBody {
    pub mode: BulkMode,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionCountResponse {
    pub selection_count: usize,
}

pub async fn toggle(
    State(state): State<AppState>,
    body: Result<Json<ToggleCell>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(body) => body,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.grid_editor.toggle(command).await)
}

pub async fn bulk(
    State(state): State<AppState>,
    body: Result<Json<BulkBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(BulkBody { mode }) = match body {
        Ok(body) => body,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.grid_editor.bulk(mode).await)
}

pub async fn pointer(
    State(state): State<AppState>,
    body: Result<Json<PointerAction>, JsonRejection>,
) -> impl IntoResponse {
    let Json(action) = match body {
        Ok(body) => body,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.grid_editor.pointer(action).await)
}

fn respond(result: Result<usize, EditSelectionGridError>) -> axum::response::Response {
    match result {
        Ok(selection_count) => Json(SelectionCountResponse { selection_count }).into_response(),
        Err(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
    }
}

#[cfg(test)]
mod edit_selection_grid_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::rate_copy::adapters::outbound::upstream_in_memory::InMemoryUpstream;
    use crate::modules::rate_copy::core::grid::SelectionGrid;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::{date, make_state, rate};

    use super::{bulk, pointer, toggle};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/grid/cells", post(toggle))
            .route("/grid/selection", post(bulk))
            .route("/grid/pointer", post(pointer))
            .with_state(state)
    }

    async fn state_with_grid() -> AppState {
        // 2024-06-15 is a Saturday, 2024-06-17 a Monday.
        let mut grid = SelectionGrid::new();
        grid.insert_rate("rt-1", date(2024, 6, 15), rate(100.0));
        grid.insert_rate("rt-1", date(2024, 6, 17), rate(90.0));
        let state = make_state(InMemoryUpstream::new());
        state.session.lock().await.grid = Some(grid);
        state
    }

    async fn count(response: axum::response::Response) -> u64 {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["selectionCount"].as_u64().unwrap()
    }

    #[tokio::test]
    async fn it_should_toggle_a_cell_and_report_the_count() {
        let body = r#"{"roomTypeID":"rt-1","date":"2024-06-15","year":2026,"selected":true}"#;

        let response = app(state_with_grid().await)
            .oneshot(
                Request::post("/grid/cells")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(count(response).await, 1);
    }

    #[tokio::test]
    async fn it_should_apply_a_bulk_weekend_selection() {
        let response = app(state_with_grid().await)
            .oneshot(
                Request::post("/grid/selection")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"mode":"weekends"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(count(response).await, 4);
    }

    #[tokio::test]
    async fn it_should_drive_a_pointer_drag() {
        let state = state_with_grid().await;
        let app = app(state);

        let down = r#"{"event":"down","cell":{"roomTypeID":"rt-1","date":"2024-06-15","year":2027}}"#;
        let response = app
            .clone()
            .oneshot(
                Request::post("/grid/pointer")
                    .header("content-type", "application/json")
                    .body(Body::from(down))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(count(response).await, 1);

        let enter =
            r#"{"event":"enter","cell":{"roomTypeID":"rt-1","date":"2024-06-17","year":2027}}"#;
        let response = app
            .clone()
            .oneshot(
                Request::post("/grid/pointer")
                    .header("content-type", "application/json")
                    .body(Body::from(enter))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(count(response).await, 2);

        let response = app
            .oneshot(
                Request::post("/grid/pointer")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"event":"up"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn it_should_return_400_without_a_grid() {
        let response = app(make_state(InMemoryUpstream::new()))
            .oneshot(
                Request::post("/grid/selection")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"mode":"all"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_422_for_an_unknown_mode() {
        let response = app(state_with_grid().await)
            .oneshot(
                Request::post("/grid/selection")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"mode":"fridays"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
