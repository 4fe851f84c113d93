/// Integration tests for the JSON API
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::*;
use std::sync::Arc;
use tower::ServiceExt;
use wish_core::RecordStore;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = app.send(get("/api/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["records"], 0);
}

#[tokio::test]
async fn test_health_check_degraded() {
    let router = create_broken_app(Arc::new(MemoryBlobStore::default()));

    let response = router.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert!(json.get("records").is_none());
}

#[tokio::test]
async fn test_create_user_returns_record() {
    let app = create_test_app().await;

    let request = valid_fields()
        .file("image_0", "cake.jpg", "image/jpeg", b"jpeg-bytes")
        .into_request("/api/users");
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["firstName"], "Ali");
    assert_eq!(json["lastName"], "Khan");
    assert_eq!(json["dateOfBirth"], "2000-05-10");
    assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
    let created_at = chrono::DateTime::parse_from_rfc3339(json["createdAt"].as_str().unwrap())
        .unwrap()
        .with_timezone(&chrono::Utc);
    assert!((chrono::Utc::now() - created_at).num_seconds().abs() < 5);

    let images = json["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert!(images[0].as_str().unwrap().ends_with("_0_cake.jpg"));

    let uploads = app.blobs.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].1, "image/jpeg");
    assert_eq!(app.records.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_user_keeps_image_order() {
    let app = create_test_app().await;

    let request = valid_fields()
        .file("image_0", "first.png", "image/png", b"1")
        .file("image_1", "second.png", "image/png", b"2")
        .file("image_2", "third.png", "image/png", b"3")
        .into_request("/api/users");
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let images: Vec<&str> = json["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|url| url.as_str().unwrap())
        .collect();

    assert_eq!(images.len(), 3);
    assert!(images[0].ends_with("_0_first.png"));
    assert!(images[1].ends_with("_1_second.png"));
    assert!(images[2].ends_with("_2_third.png"));
}

#[tokio::test]
async fn test_image_collection_stops_at_first_gap() {
    let app = create_test_app().await;

    let request = valid_fields()
        .file("image_0", "a.png", "image/png", b"a")
        .file("image_2", "c.png", "image/png", b"c")
        .into_request("/api/users");
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["images"].as_array().unwrap().len(), 1);
    assert_eq!(app.blobs.upload_count(), 1);
}

#[tokio::test]
async fn test_create_user_without_images_fails() {
    let app = create_test_app().await;

    let response = app.send(valid_fields().into_request("/api/users")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to create user");
    assert_eq!(app.blobs.upload_count(), 0);
    assert_eq!(app.records.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_user_with_missing_name_fails() {
    let app = create_test_app().await;

    let request = MultipartBody::new()
        .text("firstName", "   ")
        .text("lastName", "Khan")
        .text("dateOfBirth", "2000-05-10")
        .file("image_0", "a.png", "image/png", b"a")
        .into_request("/api/users");
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Failed to create user");
    assert_eq!(app.blobs.upload_count(), 0);
}

#[tokio::test]
async fn test_create_user_with_bad_date_uploads_nothing() {
    let app = create_test_app().await;

    let request = MultipartBody::new()
        .text("firstName", "Ali")
        .text("lastName", "Khan")
        .text("dateOfBirth", "not-a-date")
        .file("image_0", "a.png", "image/png", b"a")
        .into_request("/api/users");
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.blobs.upload_count(), 0);
    assert_eq!(app.records.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_upload_failure_creates_no_record() {
    let app = create_test_app_with(MemoryBlobStore::failing()).await;

    let request = valid_fields()
        .file("image_0", "a.png", "image/png", b"a")
        .into_request("/api/users");
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Failed to create user");
    assert_eq!(app.records.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_record_failure_leaves_uploaded_blobs() {
    let blobs = Arc::new(MemoryBlobStore::default());
    let router = create_broken_app(blobs.clone());

    let request = valid_fields()
        .file("image_0", "a.png", "image/png", b"a")
        .into_request("/api/users");
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Failed to create user");
    // Blobs are not rolled back
    assert_eq!(blobs.upload_count(), 1);
}

#[tokio::test]
async fn test_create_user_rejects_non_multipart_body() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/api/users")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"firstName":"Ali"}"#))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Failed to create user");
}

#[tokio::test]
async fn test_list_users_empty() {
    let app = create_test_app().await;

    let response = app.send(get("/api/users")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_users_newest_first() {
    let app = create_test_app().await;

    for name in ["Ali", "Sara", "Omar"] {
        let request = MultipartBody::new()
            .text("firstName", name)
            .text("lastName", "Khan")
            .text("dateOfBirth", "1995-01-20")
            .file("image_0", "a.png", "image/png", b"a")
            .into_request("/api/users");
        assert_eq!(app.send(request).await.status(), StatusCode::OK);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let response = app.send(get("/api/users")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Omar", "Sara", "Ali"]);
}

#[tokio::test]
async fn test_list_users_failure() {
    let router = create_broken_app(Arc::new(MemoryBlobStore::default()));

    let response = router.oneshot(get("/api/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Failed to fetch users");
}
