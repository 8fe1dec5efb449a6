//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `LinkError`は`status_code()`を提供し、API層はこれを使って
//! `{"success": false, "data": null}`形式の失敗レスポンスを返す。

use axum::http::StatusCode;
use thiserror::Error;

/// linkmon error type
#[derive(Debug, Error)]
pub enum LinkError {
    /// Missing, empty or malformed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Link not found
    #[error("Link not found: {0}")]
    NotFound(String),

    /// Duplicate link id
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage or connection failure
    #[error("Database error: {0}")]
    Database(String),

    /// Bootstrap configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server I/O failure while serving
    #[error("Server error: {0}")]
    Server(String),
}

impl LinkError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for LinkError {
    fn from(err: sqlx::Error) -> Self {
        LinkError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for LinkError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        LinkError::Database(format!("Migration failed: {}", err))
    }
}

/// Result type alias
pub type LinkResult<T> = Result<T, LinkError>;
