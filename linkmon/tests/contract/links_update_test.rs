//! Contract Test: PUT /api/update/:id

use crate::support::{build_app, send_json};
use axum::http::StatusCode;
use serde_json::json;

async fn seeded_app() -> axum::Router {
    let app = build_app().await;
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/add",
        Some(json!({
            "id": "u1",
            "url": "http://old.example",
            "headers": {"X-Key": "v1"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    app
}

/// ヘッダーのみ更新するとURLは維持される
#[tokio::test]
async fn test_update_headers_only() {
    let app = seeded_app().await;

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/update/u1",
        Some(json!({"headers": {"X-Key": "v2"}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["url"], "http://old.example");
    assert_eq!(body["data"]["headers"], json!({"X-Key": "v2"}));
}

/// URLのみ更新するとヘッダーは維持される
#[tokio::test]
async fn test_update_url_only() {
    let app = seeded_app().await;

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/update/u1",
        Some(json!({"url": "http://new.example"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["url"], "http://new.example");
    assert_eq!(body["data"]["headers"], json!({"X-Key": "v1"}));

    let (_, fetched) = send_json(&app, "GET", "/api/get/u1", None).await;
    assert_eq!(fetched["data"], body["data"]);
}

/// 空オブジェクトは何も変えない
#[tokio::test]
async fn test_update_empty_body_is_noop() {
    let app = seeded_app().await;

    let (status, body) = send_json(&app, "PUT", "/api/update/u1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["url"], "http://old.example");
    assert_eq!(body["data"]["headers"], json!({"X-Key": "v1"}));
}

#[tokio::test]
async fn test_update_not_found() {
    let app = build_app().await;

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/update/missing",
        Some(json!({"url": "http://x.example"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "data": null}));
}

#[tokio::test]
async fn test_update_invalid_body() {
    let app = seeded_app().await;

    let (status, _) = send_json(&app, "PUT", "/api/update/u1", Some(json!({"url": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(&app, "PUT", "/api/update/u1", Some(json!({"url": 42}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(&app, "PUT", "/api/update/u1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send_json(&app, "GET", "/api/get/u1", None).await;
    assert_eq!(body["data"]["url"], "http://old.example");
}
