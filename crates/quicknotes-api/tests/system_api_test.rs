//! Router tests for the ambient endpoints and middleware: CORS, request ids,
//! health, and the OpenAPI document.

mod helpers;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt; // for `oneshot`

use helpers::{memory_app, send};

#[tokio::test]
async fn test_cors_preflight_mirrors_everything() {
    let (app, _) = memory_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/notes/")
        .header(header::ORIGIN, "https://client.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://client.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "DELETE");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "x-custom-header"
    );
}

#[tokio::test]
async fn test_cors_simple_request_allows_any_origin() {
    let (app, _) = memory_app();

    for origin in ["http://localhost:3000", "https://anything.test"] {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/notes/")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], origin);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let (app, _) = memory_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id should be set")
        .to_str()
        .unwrap();
    let parsed = uuid::Uuid::parse_str(id).expect("request id should be a UUID");
    assert_eq!(parsed.get_version_num(), 7);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (app, _) = memory_app();

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "caller-supplied-id")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "caller-supplied-id");
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = memory_app();

    let (status, value) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = memory_app();

    let (status, value) = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value["info"]["title"],
        "Rest API using FastAPI PostgreSQL Async Endpoints"
    );
    assert!(value["paths"]["/notes/{note_id}"]["put"].is_object());
    assert!(value["paths"]["/notes/"]["post"].is_object());
}
