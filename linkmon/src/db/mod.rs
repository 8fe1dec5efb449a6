//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// リンク管理
pub mod links;

/// Repository traitパターン（テスタビリティ向上）
pub mod traits;

use crate::common::error::{LinkError, LinkResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// 埋め込みマイグレーション
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// データベース接続プールを作成し、マイグレーションを実行
///
/// ファイルパス指定のSQLiteは親ディレクトリが無いと開けないため先に作成する。
pub async fn create_pool(database_url: &str) -> LinkResult<SqlitePool> {
    let Some(path) = database_url.strip_prefix("sqlite:") else {
        return Err(LinkError::Config(format!(
            "Unsupported database URL (expected sqlite:): {}",
            database_url
        )));
    };

    // `sqlite::memory:` のような特殊指定はスキップ
    if !path.starts_with(':') {
        let normalized = path.trim_start_matches("//");
        let path_without_params = normalized.split('?').next().unwrap_or(normalized);
        let db_path = std::path::Path::new(path_without_params);
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LinkError::Config(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
    }

    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| LinkError::Config(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    // インメモリDBは接続ごとに別DBになるため単一接続に固定する
    let pool_options = if path.starts_with(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(connect_options).await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}
