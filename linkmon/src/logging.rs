//! ロギング初期化
//!
//! 標準出力には人間向けフォーマット、`LINKMON_LOG_DIR` 指定時は
//! 日次ローテーションのJSONファイルにも出力する。

use crate::common::error::{LinkError, LinkResult};
use crate::config::get_env_with_fallback;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// フィルタ未指定時のデフォルト
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// ログファイル名のプレフィックス
const LOG_FILE_PREFIX: &str = "linkmon.log";

/// フィルタディレクティブを解決する
///
/// `LINKMON_LOG_LEVEL`（旧: `RUST_LOG`）が不正な場合はデフォルトに戻す。
pub fn resolve_filter() -> EnvFilter {
    get_env_with_fallback("LINKMON_LOG_LEVEL", "RUST_LOG")
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// グローバルsubscriberを設定
pub fn init() -> LinkResult<()> {
    let file_layer = get_env_with_fallback("LINKMON_LOG_DIR", "LINKMON_LOG_DIR").map(|dir| {
        fmt::layer()
            .with_writer(rolling::daily(dir, LOG_FILE_PREFIX))
            .with_ansi(false)
            .json()
    });

    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(resolve_filter())
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| LinkError::Config(format!("Failed to initialize logging: {}", e)))
}
