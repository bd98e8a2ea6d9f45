//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle: content CRUD, admin gating,
//! contact submissions, and cache behavior observable through the API.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use content_api::{
    api::{create_router, ADMIN_TOKEN_HEADER},
    content::{ContentService, InMemoryBackend},
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

const ADMIN_TOKEN: &str = "test-token";

// == Helper Functions ==

fn create_test_app() -> Router {
    let service = ContentService::new(Arc::new(InMemoryBackend::new()));
    let state = AppState::new(service, ADMIN_TOKEN);
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn admin_json(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header(ADMIN_TOKEN_HEADER, ADMIN_TOKEN)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(ADMIN_TOKEN_HEADER, ADMIN_TOKEN)
        .body(Body::empty())
        .unwrap()
}

async fn create_blog(app: &Router, title: &str) -> String {
    let body = format!(
        r#"{{"title":"{title}","slug":"{slug}","content":"body","author":"Jordan","published":true}}"#,
        slug = title.to_lowercase()
    );
    let response = app
        .clone()
        .oneshot(admin_json("POST", "/blogs", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    json["id"].as_str().unwrap().to_string()
}

// == Health & Stats ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_cache_stats_endpoint_empty() {
    let app = create_test_app();

    let response = app.oneshot(get("/cache/stats")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["entries"], 0);
    assert_eq!(json["in_flight"], 0);
}

// == Blog Endpoints ==

#[tokio::test]
async fn test_blog_crud_cycle() {
    let app = create_test_app();
    let id = create_blog(&app, "First Post").await;

    // Listed publicly
    let response = app.clone().oneshot(get("/blogs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_to_json(response.into_body()).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "First Post");

    // Fetch detail
    let response = app.clone().oneshot(get(&format!("/blogs/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Update; the stale cached listing must not survive
    let response = app
        .clone()
        .oneshot(admin_json(
            "PUT",
            &format!("/blogs/{id}"),
            r#"{"title":"Revised Post"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/blogs")).await.unwrap();
    let listed = body_to_json(response.into_body()).await;
    assert_eq!(listed[0]["title"], "Revised Post");

    // Delete, then detail is gone
    let response = app
        .clone()
        .oneshot(admin("DELETE", &format!("/blogs/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get(&format!("/blogs/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blog_mutation_requires_token() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/blogs")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"title":"T","slug":"t","content":"c","author":"A"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_create_blog_empty_title_is_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(admin_json(
            "POST",
            "/blogs",
            r#"{"title":" ","slug":"t","content":"c","author":"A"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_blog_blank_title_is_rejected() {
    let app = create_test_app();
    let id = create_blog(&app, "Keep Me").await;

    let response = app
        .clone()
        .oneshot(admin_json(
            "PUT",
            &format!("/blogs/{id}"),
            r#"{"title":""}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The stored title is untouched
    let response = app.oneshot(get(&format!("/blogs/{id}"))).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["title"], "Keep Me");
}

#[tokio::test]
async fn test_get_blog_unknown_id_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(get("/blogs/00000000-0000-0000-0000-000000000000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_listing_hits_cache() {
    let app = create_test_app();
    create_blog(&app, "Cached Post").await;

    app.clone().oneshot(get("/blogs")).await.unwrap();
    app.clone().oneshot(get("/blogs")).await.unwrap();

    let response = app.oneshot(get("/cache/stats")).await.unwrap();
    let stats = body_to_json(response.into_body()).await;
    assert_eq!(stats["entries"], 1);
    assert!(stats["hits"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn test_cache_clear_endpoint() {
    let app = create_test_app();
    create_blog(&app, "Soon Cleared").await;
    app.clone().oneshot(get("/blogs")).await.unwrap();

    let response = app
        .clone()
        .oneshot(admin("POST", "/cache/clear"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/cache/stats")).await.unwrap();
    let stats = body_to_json(response.into_body()).await;
    assert_eq!(stats["entries"], 0);
}

// == Career Endpoints ==

#[tokio::test]
async fn test_career_create_and_fetch() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(admin_json(
            "POST",
            "/careers",
            r#"{"title":"Senior Consultant","department":"Strategy","type":"Full-time","location":"Remote","description":"d","requirements":["MBA"]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_to_json(response.into_body()).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app.oneshot(get(&format!("/careers/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let career = body_to_json(response.into_body()).await;
    assert_eq!(career["type"], "Full-time");
}

// == Banner Endpoints ==

#[tokio::test]
async fn test_banners_listed_in_display_order() {
    let app = create_test_app();

    for (title, order) in [("Second", 2), ("First", 1)] {
        let body = format!(r#"{{"title":"{title}","display_order":{order}}}"#);
        let response = app
            .clone()
            .oneshot(admin_json("POST", "/banners", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/banners")).await.unwrap();
    let banners = body_to_json(response.into_body()).await;
    assert_eq!(banners[0]["title"], "First");
    assert_eq!(banners[1]["title"], "Second");
}

// == Contact Endpoints ==

#[tokio::test]
async fn test_contact_submission_flow() {
    let app = create_test_app();

    // Public submit
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"N","email":"n@example.com","subject":"Hello","message":"Hi"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_to_json(response.into_body()).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Listing requires the admin token
    let response = app.clone().oneshot(get("/contact")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.clone().oneshot(admin("GET", "/contact")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_to_json(response.into_body()).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["is_read"], false);

    // Mark read, then delete
    let response = app
        .clone()
        .oneshot(admin("PUT", &format!("/contact/{id}/read")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(admin("DELETE", &format!("/contact/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(admin("GET", "/contact")).await.unwrap();
    let listed = body_to_json(response.into_body()).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_invalid_email_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"N","email":"invalid","subject":"s","message":"m"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
