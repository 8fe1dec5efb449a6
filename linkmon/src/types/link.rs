//! リンク型定義

use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

/// プローブ時に付与するリクエストヘッダー（名前 → 値）
pub type LinkHeaders = BTreeMap<String, String>;

/// APIレスポンスで使う`last_checked`の書式
pub const LAST_CHECKED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 監視対象リンク
///
/// `status`と`last_checked`はプローブ時のみ書き換えられる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// 一意識別子（クライアント指定、変更不可）
    pub id: String,
    /// プローブ先URL
    pub url: String,
    /// 直近のプローブがHTTP 200を返したか
    pub status: bool,
    /// 直近のプローブ時刻（未プローブならNone）
    pub last_checked: Option<DateTime<FixedOffset>>,
    /// プローブ時に付与するヘッダー
    pub headers: LinkHeaders,
}

impl Link {
    /// 新しいリンクを作成（未プローブ状態）
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            status: false,
            last_checked: None,
            headers: LinkHeaders::new(),
        }
    }

    /// ヘッダーを設定
    pub fn with_headers(mut self, headers: LinkHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// `last_checked`をAPI表示用に整形
    pub fn last_checked_display(&self) -> Option<String> {
        self.last_checked
            .map(|dt| dt.format(LAST_CHECKED_FORMAT).to_string())
    }
}
