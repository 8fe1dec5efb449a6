//! REST APIハンドラー
//!
//! リンクCRUDとプローブのエンドポイントを提供

pub mod docs;
pub mod error;
pub mod links;
pub mod ping;
pub mod response;

use crate::common::error::LinkError;
use crate::AppState;
use axum::{
    http::Uri,
    routing::{any, delete, get, post, put},
    Router,
};
use error::AppError;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(docs::redirect_to_docs))
        .route("/docs", get(docs::docs_page))
        .route("/api/ping", any(ping::ping_all))
        .route("/api/list", get(links::list_links))
        .route("/api/get/:id", get(links::get_link))
        .route("/api/add", post(links::add_link))
        .route("/api/update/:id", put(links::update_link))
        .route("/api/delete/:id", delete(links::delete_link))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError(LinkError::NotFound(format!("route {}", uri.path())))
}
