//! linkmon
//!
//! URLを登録し、要求時にHTTP GETでプローブして稼働状況を記録するリンク監視サーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// サーバー初期化
pub mod bootstrap;

/// CLIインターフェース
pub mod cli;

/// 共通型（エラー）
pub mod common;

/// 環境変数設定
pub mod config;

/// データベースアクセス
pub mod db;

/// リンクプローブ
pub mod health;

/// ロギング初期化
pub mod logging;

/// リンクレジストリ
pub mod registry;

/// サーバー起動
pub mod server;

/// 型定義
pub mod types;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// データベース接続プール
    pub db_pool: sqlx::SqlitePool,
    /// リンクレジストリ
    pub links: registry::LinkRegistry,
    /// リンクプローバー
    pub prober: health::LinkProber,
}
