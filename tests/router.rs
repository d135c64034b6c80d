mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use buzzarfeed::app::App;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn router(dir: &TempDir) -> Router {
    App::router(common::context(common::unreachable_pool(), dir.path()))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_check_answers_with_envelope() {
    let dir = TempDir::new().unwrap();
    let (status, body) = send(router(&dir), get("/api")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Welcome to BuzzarFeed API",
            "data": null,
            "errors": [],
        })
    );
}

#[tokio::test]
async fn categories_are_public() {
    let dir = TempDir::new().unwrap();
    let (status, body) = send(router(&dir), get("/api/stalls/categories")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .contains(&json!("Street Food")));
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let dir = TempDir::new().unwrap();

    for uri in ["/api/users/profile", "/api/stalls/mine", "/api/admin/dashboard"] {
        let (status, body) = send(router(&dir), get(uri)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["errors"], json!(["Invalid session token"]));
    }
}

#[tokio::test]
async fn unknown_routes_are_404() {
    let dir = TempDir::new().unwrap();
    let (status, body) = send(router(&dir), get("/api/night-market")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Route not found"));
}

#[tokio::test]
async fn sign_up_reports_every_validation_error() {
    let dir = TempDir::new().unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/sign-up")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "name": "Ligaya",
                "email": "not-an-email",
                "confirm_email": "not-an-email",
                "password": "weak",
                "confirm_password": "weak",
            })
            .to_string(),
        ))
        .unwrap();

    let (status, body) = send(router(&dir), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Validation failed"));
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn malformed_json_is_rejected_with_envelope() {
    let dir = TempDir::new().unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/sign-in")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\":"))
        .unwrap();

    let (status, body) = send(router(&dir), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn out_of_range_pagination_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (status, body) = send(router(&dir), get("/api/stalls?page=0&per_page=10")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}
