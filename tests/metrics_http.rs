// tests/metrics_http.rs
//
// The /metrics route renders the Prometheus exposition format once the
// recorder is installed. Single test so the global recorder is only
// installed once per test binary.

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt as _;

use sentiment_api::api::{create_router, AppState};
use sentiment_api::metrics::Metrics;

#[tokio::test]
async fn metrics_route_renders_after_traffic() {
    let metrics = Metrics::init();
    let app = create_router(AppState::new()).merge(metrics.router());

    // Drive one analyze request so the counter exists.
    let payload = json!({ "text": "solid release" });
    let req = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST /api/analyze");
    let resp = app.clone().oneshot(req).await.expect("oneshot analyze");
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("GET")
        .uri("/metrics")
        .body(Body::empty())
        .expect("build GET /metrics");
    let resp = app.oneshot(req).await.expect("oneshot /metrics");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec();
    let text = String::from_utf8(bytes).expect("utf8");
    assert!(
        text.contains("sentiment_analyze_requests_total"),
        "exposition missing analyze counter:\n{text}"
    );
}
