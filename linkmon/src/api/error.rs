//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::LinkError;
use axum::{extract::rejection::JsonRejection, response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, warn};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub LinkError);

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        AppError(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(LinkError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();

        // 詳細はログのみに残し、クライアントには固定の失敗エンベロープを返す
        if status.is_server_error() {
            error!(error = %self.0, status = status.as_u16(), "Request failed");
        } else {
            warn!(error = %self.0, status = status.as_u16(), "Request rejected");
        }

        let payload = json!({
            "success": false,
            "data": null
        });

        (status, Json(payload)).into_response()
    }
}
