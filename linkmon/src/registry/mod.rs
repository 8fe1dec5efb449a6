//! リンクレジストリ
//!
//! リンクの永続ストア。すべての書き込みは呼び出しが返る前にコミットされる。
//! キャッシュは持たず、読み出しは毎回DBから行う。

use crate::common::error::{LinkError, LinkResult};
use crate::db::traits::LinkRepository;
use crate::types::link::{Link, LinkHeaders};
use chrono::{DateTime, FixedOffset};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, info};

/// リンクレジストリ
#[derive(Clone)]
pub struct LinkRegistry {
    repo: Arc<dyn LinkRepository>,
}

impl LinkRegistry {
    /// SQLiteプールからレジストリを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: Arc::new(pool),
        }
    }

    /// 任意のRepository実装からレジストリを作成
    pub fn with_repository(repo: Arc<dyn LinkRepository>) -> Self {
        Self { repo }
    }

    /// リンクを追加
    ///
    /// `id`または`url`が空なら`Validation`、同じ`id`が存在すれば`Conflict`。
    /// 既存行は上書きしない。
    pub async fn add(&self, id: &str, url: &str, headers: Option<LinkHeaders>) -> LinkResult<Link> {
        if id.trim().is_empty() {
            return Err(LinkError::Validation("id is required".to_string()));
        }
        if url.trim().is_empty() {
            return Err(LinkError::Validation("url is required".to_string()));
        }

        if self.repo.get_link(id).await?.is_some() {
            return Err(LinkError::Conflict(format!(
                "Link with id '{}' already exists",
                id
            )));
        }

        let link = Link::new(id, url).with_headers(headers.unwrap_or_default());

        match self.repo.create_link(&link).await {
            Ok(()) => {}
            // 事前チェックと挿入の間に同じIDが登録された場合
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(LinkError::Conflict(format!(
                    "Link with id '{}' already exists",
                    id
                )));
            }
            Err(e) => return Err(e.into()),
        }

        info!(link_id = %link.id, url = %link.url, "Link added");
        Ok(link)
    }

    /// すべてのリンクを取得（順序は格納順）
    pub async fn get_all(&self) -> LinkResult<Vec<Link>> {
        Ok(self.repo.list_links().await?)
    }

    /// リンクを取得
    pub async fn get(&self, id: &str) -> LinkResult<Link> {
        self.repo
            .get_link(id)
            .await?
            .ok_or_else(|| LinkError::NotFound(id.to_string()))
    }

    /// URL・ヘッダーを部分更新
    ///
    /// 指定されたフィールドのみ書き換える。
    pub async fn update(
        &self,
        id: &str,
        url: Option<String>,
        headers: Option<LinkHeaders>,
    ) -> LinkResult<Link> {
        if let Some(ref url) = url {
            if url.trim().is_empty() {
                return Err(LinkError::Validation("url must not be empty".to_string()));
            }
        }

        let mut link = self.get(id).await?;
        if let Some(url) = url {
            link.url = url;
        }
        if let Some(headers) = headers {
            link.headers = headers;
        }

        if !self.repo.update_link(&link).await? {
            // 取得後に別リクエストで削除された
            return Err(LinkError::NotFound(id.to_string()));
        }

        info!(link_id = %link.id, url = %link.url, "Link updated");
        Ok(link)
    }

    /// リンクを削除し、削除したレコードを返す
    pub async fn delete(&self, id: &str) -> LinkResult<Link> {
        let link = self
            .repo
            .delete_link(id)
            .await?
            .ok_or_else(|| LinkError::NotFound(id.to_string()))?;

        info!(link_id = %link.id, "Link deleted");
        Ok(link)
    }

    /// プローブ結果（`status`と`last_checked`）を記録
    pub async fn record_probe(
        &self,
        id: &str,
        status: bool,
        checked_at: DateTime<FixedOffset>,
    ) -> LinkResult<Link> {
        if !self
            .repo
            .update_probe_result(id, status, checked_at)
            .await?
        {
            return Err(LinkError::NotFound(id.to_string()));
        }

        debug!(link_id = %id, status, "Probe result recorded");
        self.get(id).await
    }
}
