//! Contract Test: ANY /api/ping

use crate::support::{build_app, send_json};
use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_ping_without_links() {
    let app = build_app().await;

    let (status, body) = send_json(&app, "GET", "/api/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "data": []}));
}

/// GET以外のメソッドでも受け付ける
#[tokio::test]
async fn test_ping_accepts_any_method() {
    let app = build_app().await;

    for m in ["GET", "POST", "PUT", "DELETE", "PATCH"] {
        let (status, body) = send_json(&app, m, "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK, "method {m}");
        assert_eq!(body["success"], true);
    }
}

/// 200は`status: true`、到達不能は`status: false`でもリクエスト自体は成功
#[tokio::test]
async fn test_ping_records_status() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock)
        .await;

    let dead_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let app = build_app().await;
    send_json(
        &app,
        "POST",
        "/api/add",
        Some(json!({"id": "up", "url": format!("{}/ok", mock.uri())})),
    )
    .await;
    send_json(
        &app,
        "POST",
        "/api/add",
        Some(json!({"id": "down", "url": format!("http://127.0.0.1:{}/", dead_port)})),
    )
    .await;

    let (status, body) = send_json(&app, "GET", "/api/ping", None).await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    let up = data.iter().find(|l| l["id"] == "up").unwrap();
    let down = data.iter().find(|l| l["id"] == "down").unwrap();
    assert_eq!(up["status"], true);
    assert_eq!(down["status"], false);
    for link in data {
        let checked = link["last_checked"].as_str().unwrap();
        assert_eq!(checked.len(), "YYYY-MM-DD HH:MM:SS".len());
    }

    // 結果は保存されている
    let (_, listed) = send_json(&app, "GET", "/api/list", None).await;
    assert_eq!(listed["data"], body["data"]);
}
