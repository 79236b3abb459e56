//! Router tests for the health endpoint and the per-request view context.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use git_viewer_core::{server::build_app, Config};
use serde_json::Value;
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        port: 0,
        prefix: "/git".to_string(),
    }
}

async fn get_health(request: Request<Body>) -> (StatusCode, Value) {
    let response = build_app(test_config()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_reports_prefix() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = get_health(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["prefix"], "/git");
    assert_eq!(body["pjax"], false);
    assert!(body.get("hostname").is_none());
}

#[tokio::test]
async fn health_resolves_forwarded_host_and_pjax() {
    let request = Request::builder()
        .uri("/health")
        .header("host", "127.0.0.1:8080")
        .header("x-forwarded-host", "git.example.com")
        .header("x-pjax", "true")
        .body(Body::empty())
        .unwrap();

    let (_, body) = get_health(request).await;

    assert_eq!(body["hostname"], "git.example.com");
    assert_eq!(body["pjax"], true);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/linux/commit/abc.patch")
        .body(Body::empty())
        .unwrap();

    let response = build_app(test_config()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
