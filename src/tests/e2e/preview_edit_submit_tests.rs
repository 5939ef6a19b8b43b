use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::rate_copy::adapters::outbound::upstream_in_memory::InMemoryUpstream;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::{date, rate, room};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Basic mode end to end: load room types, build a range preview, edit one
/// rate, dismiss the preview, and still submit the full batch.
#[tokio::test]
async fn previews_edits_and_submits_a_range_batch() {
    let mut upstream = InMemoryUpstream::with_room_types(vec![room("rt-1", "Double")]);
    // 2024-06-15 is a Saturday.
    upstream.add_rate("rt-1", date(2024, 6, 15), rate(120.0));
    let upstream = Arc::new(upstream);
    let state = AppState::new(upstream.clone());
    let app = router(state.clone());

    let response = send(
        &app,
        Request::get("/room-types?propertyID=prop-1")
            .header("X-Bearer-Token", "tok")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        post_json(
            "/preview/range",
            r#"{"roomTypeIDs":["rt-1"],"targetYears":[2027,2026],"from":"2024-06-15","to":"2024-06-15"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let preview = body_json(response).await;
    let operations = preview["operations"].as_array().unwrap();
    assert_eq!(operations.len(), 2);
    // Years expand ascending; both targets keep the Saturday.
    assert_eq!(operations[0]["targetDate"], "2026-06-13");
    assert_eq!(operations[1]["targetDate"], "2027-06-12");
    assert_eq!(operations[0]["targetDay"], "Sat");

    let response = send(
        &app,
        Request::patch("/preview/rates/0")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"amount":"65"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        Request::post("/preview/dismiss").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(
        &app,
        Request::post("/preview/submit").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let submitted = body_json(response).await;
    assert_eq!(submitted["summary"], "2/2 successful");
    assert_eq!(submitted["results"][0]["rate"], 65.0);
    assert_eq!(submitted["results"][1]["rate"], 120.0);

    let requests = upstream.copy_requests.lock().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].rate_data.amount(), 65.0);
    assert_eq!(requests[0].target_years, vec![2026]);
    assert_eq!(requests[1].target_years, vec![2027]);
    drop(requests);

    assert!(
        state.session.lock().await.pending().is_none(),
        "batch clears once results are reported"
    );
}

/// Advanced mode end to end: load the grid, bulk-select weekends, build
/// the grid preview, submit, and watch a mid-batch failure stay isolated.
#[tokio::test]
async fn selects_on_the_grid_and_submits_with_a_partial_failure() {
    let mut upstream = InMemoryUpstream::with_room_types(vec![room("rt-1", "Double")]);
    // Friday the 14th through Sunday the 16th; only the weekend is rated.
    upstream.add_rate("rt-1", date(2024, 6, 15), rate(100.0));
    upstream.add_rate("rt-1", date(2024, 6, 16), rate(110.0));
    // 2024-06-15 aligned into 2026 lands on 2026-06-13.
    upstream.drop_copies_for(date(2026, 6, 13));
    let upstream = Arc::new(upstream);
    let app = router(AppState::new(upstream.clone()));

    let response = send(
        &app,
        Request::get("/room-types?propertyID=prop-1")
            .header("X-Bearer-Token", "tok")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        post_json(
            "/grid",
            r#"{"roomTypeIDs":["rt-1"],"from":"2024-06-14","to":"2024-06-16"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["rows"].as_array().unwrap().len(), 2);

    let response = send(&app, post_json("/grid/selection", r#"{"mode":"weekends"}"#)).await;
    assert_eq!(body_json(response).await["selectionCount"], 8);

    let response = send(&app, post_json("/preview/grid", "")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let preview = body_json(response).await;
    let operations = preview["operations"].as_array().unwrap();
    assert_eq!(operations.len(), 8);
    // Dates ascending, then years ascending within each date.
    assert_eq!(operations[0]["sourceDate"], "2024-06-15");
    assert_eq!(operations[0]["targetYear"], 2026);
    assert_eq!(operations[3]["targetYear"], 2029);
    assert_eq!(operations[4]["sourceDate"], "2024-06-16");

    let response = send(
        &app,
        Request::post("/preview/submit").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let submitted = body_json(response).await;
    assert_eq!(submitted["summary"], "7/8 successful");
    let results = submitted["results"].as_array().unwrap();
    assert_eq!(results.len(), 8);
    assert_eq!(results[0]["success"], false);
    assert_eq!(results[0]["year"], 2026);
    assert!(results[1..].iter().all(|result| result["success"] == true));
}
