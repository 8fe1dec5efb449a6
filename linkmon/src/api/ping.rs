//! プローブAPI

use super::error::AppError;
use super::response::{ApiResponse, LinkResponse};
use crate::AppState;
use axum::{extract::State, Json};

/// ANY /api/ping
///
/// 全リンクを順にプローブして結果を保存する。プローブ失敗は`status: false`になるだけで、
/// エラーになるのはストレージ障害のときのみ。
pub async fn ping_all(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LinkResponse>>>, AppError> {
    let links = state.links.get_all().await?;
    let probed = state.prober.probe_all(&state.links, links).await?;
    Ok(Json(ApiResponse::ok(
        probed.into_iter().map(LinkResponse::from).collect(),
    )))
}
