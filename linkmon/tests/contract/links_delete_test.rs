//! Contract Test: DELETE /api/delete/:id

use crate::support::{build_app, send_json};
use axum::http::StatusCode;
use serde_json::json;

/// 削除したレコードが返り、以降は404
#[tokio::test]
async fn test_delete_link_success() {
    let app = build_app().await;
    send_json(
        &app,
        "POST",
        "/api/add",
        Some(json!({"id": "d1", "url": "http://example.com", "headers": {"A": "1"}})),
    )
    .await;

    let (status, body) = send_json(&app, "DELETE", "/api/delete/d1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "d1");
    assert_eq!(body["data"]["headers"], json!({"A": "1"}));

    let (status, _) = send_json(&app, "GET", "/api/get/d1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send_json(&app, "GET", "/api/list", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_delete_unknown_link() {
    let app = build_app().await;

    let (status, body) = send_json(&app, "DELETE", "/api/delete/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "data": null}));
}
