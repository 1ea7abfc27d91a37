mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::TestApp;
use records_service::services::init_metrics;
use service_core::middleware::REQUEST_ID_HEADER;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::with_data(vec![], vec![]);

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "records-service");
}

#[tokio::test]
async fn health_check_reports_unreachable_store() {
    let app = TestApp::failing();

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");

    let (status, _) = app.get("/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    init_metrics();
    let app = TestApp::with_data(vec![], vec![]);

    // Record at least one request first.
    app.get("/record").await;

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn openapi_document_lists_record_routes() {
    let app = TestApp::with_data(vec![], vec![]);

    let (status, body) = app.get_json("/.well-known/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/record"].is_object());
    assert!(body["paths"]["/record/{id}"].is_object());
    assert!(body["paths"]["/record/appointments/{patientId}"].is_object());
}

#[tokio::test]
async fn swagger_ui_is_served_at_both_mounts() {
    let app = TestApp::with_swagger();

    for uri in ["/docs/", "/api-docs/"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(String::from_utf8_lossy(&body).contains("swagger"), "{uri}");
    }

    let (status, body) = app.get_json("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/record/{id}"].is_object());

    let (status, _) = app.get_json("/.well-known/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_request_id_and_cors_headers() {
    let app = TestApp::with_data(vec![], vec![]);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/record")
                .header("origin", "http://frontend.test")
                .header(REQUEST_ID_HEADER, "trace-me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-me");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
}
