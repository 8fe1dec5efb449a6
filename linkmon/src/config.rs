//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

use crate::common::error::{LinkError, LinkResult};
use chrono::{FixedOffset, Offset, Utc};
use std::time::Duration;

/// デフォルトのデータベースURL
pub const DEFAULT_DATABASE_URL: &str = "sqlite:linkmon.db";

/// デフォルトのプローブタイムアウト（秒）
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// デフォルトのタイムゾーンオフセット
pub const DEFAULT_TZ_OFFSET: &str = "+07:00";

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use linkmon::config::get_env_with_fallback;
///
/// let url = get_env_with_fallback("LINKMON_DATABASE_URL", "CRON_DATABASE_URL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// データベースURLを取得
///
/// 環境変数 `LINKMON_DATABASE_URL`（旧: `CRON_DATABASE_URL`）から取得し、
/// 未設定の場合は `sqlite:linkmon.db` を返す。
pub fn get_database_url() -> String {
    get_env_with_fallback_or(
        "LINKMON_DATABASE_URL",
        "CRON_DATABASE_URL",
        DEFAULT_DATABASE_URL,
    )
}

/// `+07:00` / `-05:30` / `Z` 形式のオフセットをパース
pub fn parse_tz_offset(value: &str) -> LinkResult<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value == "UTC" {
        return Ok(Utc.fix());
    }

    let invalid = || LinkError::Config(format!("Invalid timezone offset: '{}'", value));
    if !value.is_ascii() {
        return Err(invalid());
    }

    let (sign, rest) = match value.as_bytes().first() {
        Some(b'+') => (1, &value[1..]),
        Some(b'-') => (-1, &value[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// 待ち受けポート
    pub port: u16,
    /// データベースURL
    pub database_url: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: get_env_with_fallback_or("LINKMON_HOST", "LINKMON_HOST", "0.0.0.0"),
            port: get_env_with_fallback_parse("LINKMON_PORT", "LINKMON_PORT", 8000u16),
            database_url: get_database_url(),
        }
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// プローブ設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// 1リクエストあたりのタイムアウト
    pub timeout: Duration,
    /// `last_checked` を記録するオフセット
    pub offset: FixedOffset,
}

impl ProbeConfig {
    /// Load probe configuration from environment variables.
    ///
    /// オフセットが不正な場合は `Config` エラー。
    pub fn from_env() -> LinkResult<Self> {
        let timeout_secs = get_env_with_fallback_parse(
            "LINKMON_PROBE_TIMEOUT_SECS",
            "LINKMON_PROBE_TIMEOUT_SECS",
            DEFAULT_PROBE_TIMEOUT_SECS,
        );
        let offset = parse_tz_offset(&get_env_with_fallback_or(
            "LINKMON_TZ_OFFSET",
            "LINKMON_TZ_OFFSET",
            DEFAULT_TZ_OFFSET,
        ))?;

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            offset,
        })
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            offset: FixedOffset::east_opt(7 * 3600).unwrap_or_else(|| Utc.fix()),
        }
    }
}
