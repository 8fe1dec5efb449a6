//! serve サブコマンド
//!
//! リンク監視サーバーを起動します。

use crate::config::{get_database_url, ServerConfig};
use clap::Args;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value = "8000", env = "LINKMON_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "LINKMON_HOST")]
    pub host: String,

    /// Database URL (sqlite:...)
    #[arg(long, env = "LINKMON_DATABASE_URL")]
    pub database_url: Option<String>,
}

impl ServeArgs {
    /// フラグ（と環境変数）からサーバー設定を組み立てる
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            database_url: self.database_url.unwrap_or_else(get_database_url),
        }
    }
}
