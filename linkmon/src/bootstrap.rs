//! サーバー初期化ロジック
//!
//! データベース接続、マイグレーション、プローバー生成など
//! サーバー起動に必要なコンポーネントの初期化を担当する。

use crate::common::error::LinkResult;
use crate::config::{ProbeConfig, ServerConfig};
use crate::health::LinkProber;
use crate::registry::LinkRegistry;
use crate::{db, AppState};
use sqlx::SqlitePool;
use tracing::info;

/// 既存のプールから`AppState`を組み立てる
pub fn build_state(db_pool: SqlitePool, probe_config: ProbeConfig) -> LinkResult<AppState> {
    let prober = LinkProber::new(probe_config)?;
    Ok(AppState {
        links: LinkRegistry::new(db_pool.clone()),
        db_pool,
        prober,
    })
}

/// サーバー初期化を実行する
///
/// DB接続（必要ならファイル作成）とマイグレーションを行い、`AppState` を返す。
pub async fn initialize(config: &ServerConfig) -> LinkResult<AppState> {
    info!("linkmon v{}", env!("CARGO_PKG_VERSION"));

    let probe_config = ProbeConfig::from_env()?;

    let db_pool = db::create_pool(&config.database_url).await?;
    info!(database_url = %config.database_url, "Database ready");

    info!(
        timeout_secs = probe_config.timeout.as_secs(),
        offset = %probe_config.offset,
        "Prober configured"
    );

    build_state(db_pool, probe_config)
}
