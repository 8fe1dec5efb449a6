//! 成功レスポンスのエンベロープとリンクの表現

use crate::types::link::{Link, LinkHeaders};
use serde::Serialize;

/// `{"success": true, "data": ...}` 形式のレスポンス
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// 常にtrue（失敗時は`AppError`が別形式で返す）
    pub success: bool,
    /// ペイロード
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 成功レスポンスを作成
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// APIで返すリンク表現
#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    /// リンクID
    pub id: String,
    /// プローブ対象URL
    pub url: String,
    /// 直近のプローブでHTTP 200が返ったか
    pub status: bool,
    /// `YYYY-MM-DD HH:MM:SS`、未プローブならnull
    pub last_checked: Option<String>,
    /// プローブ時に送るヘッダー
    pub headers: LinkHeaders,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        let last_checked = link.last_checked_display();
        Self {
            id: link.id,
            url: link.url,
            status: link.status,
            last_checked,
            headers: link.headers,
        }
    }
}
