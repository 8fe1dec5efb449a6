//! リンク管理API
//!
//! リクエストボディはJSONのみ受け付ける。形式違いは400。

use super::error::AppError;
use super::response::{ApiResponse, LinkResponse};
use crate::types::link::LinkHeaders;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;

/// リンク登録リクエスト
#[derive(Debug, Deserialize)]
pub struct AddLinkRequest {
    /// リンクID
    pub id: String,
    /// プローブ対象URL
    pub url: String,
    /// プローブ時に送るヘッダー（任意）
    #[serde(default)]
    pub headers: Option<LinkHeaders>,
}

/// リンク更新リクエスト
///
/// 指定されたフィールドのみ更新する。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLinkRequest {
    /// 新しいURL
    #[serde(default)]
    pub url: Option<String>,
    /// 新しいヘッダー（置き換え）
    #[serde(default)]
    pub headers: Option<LinkHeaders>,
}

type LinkJson = Json<ApiResponse<LinkResponse>>;

/// GET /api/list
pub async fn list_links(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LinkResponse>>>, AppError> {
    let links = state.links.get_all().await?;
    Ok(Json(ApiResponse::ok(
        links.into_iter().map(LinkResponse::from).collect(),
    )))
}

/// GET /api/get/:id
pub async fn get_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<LinkJson, AppError> {
    let link = state.links.get(&id).await?;
    Ok(Json(ApiResponse::ok(link.into())))
}

/// POST /api/add
pub async fn add_link(
    State(state): State<AppState>,
    payload: Result<Json<AddLinkRequest>, JsonRejection>,
) -> Result<LinkJson, AppError> {
    let Json(req) = payload?;
    let link = state.links.add(&req.id, &req.url, req.headers).await?;
    Ok(Json(ApiResponse::ok(link.into())))
}

/// PUT /api/update/:id
pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<LinkJson, AppError> {
    let Json(req) = payload?;
    let link = state.links.update(&id, req.url, req.headers).await?;
    Ok(Json(ApiResponse::ok(link.into())))
}

/// DELETE /api/delete/:id
pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<LinkJson, AppError> {
    let link = state.links.delete(&id).await?;
    Ok(Json(ApiResponse::ok(link.into())))
}
