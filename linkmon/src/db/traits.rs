//! Repository traitパターン定義
//!
//! DB操作を抽象化し、テスタビリティを向上させるためのtrait。
//! 各メソッドは`db::links`のフリー関数に対応する。

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sqlx::SqlitePool;

use crate::types::link::Link;

/// リンクCRUD操作のRepository trait
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// リンクを登録
    async fn create_link(&self, link: &Link) -> Result<(), sqlx::Error>;
    /// リンク一覧を取得
    async fn list_links(&self) -> Result<Vec<Link>, sqlx::Error>;
    /// IDでリンクを取得
    async fn get_link(&self, id: &str) -> Result<Option<Link>, sqlx::Error>;
    /// URLとヘッダーを更新
    async fn update_link(&self, link: &Link) -> Result<bool, sqlx::Error>;
    /// プローブ結果を記録
    async fn update_probe_result(
        &self,
        id: &str,
        status: bool,
        checked_at: DateTime<FixedOffset>,
    ) -> Result<bool, sqlx::Error>;
    /// リンクを削除し、削除した行を返す
    async fn delete_link(&self, id: &str) -> Result<Option<Link>, sqlx::Error>;
}

#[async_trait]
impl LinkRepository for SqlitePool {
    async fn create_link(&self, link: &Link) -> Result<(), sqlx::Error> {
        super::links::create_link(self, link).await
    }

    async fn list_links(&self) -> Result<Vec<Link>, sqlx::Error> {
        super::links::list_links(self).await
    }

    async fn get_link(&self, id: &str) -> Result<Option<Link>, sqlx::Error> {
        super::links::get_link(self, id).await
    }

    async fn update_link(&self, link: &Link) -> Result<bool, sqlx::Error> {
        super::links::update_link(self, link).await
    }

    async fn update_probe_result(
        &self,
        id: &str,
        status: bool,
        checked_at: DateTime<FixedOffset>,
    ) -> Result<bool, sqlx::Error> {
        super::links::update_probe_result(self, id, status, checked_at).await
    }

    async fn delete_link(&self, id: &str) -> Result<Option<Link>, sqlx::Error> {
        super::links::delete_link(self, id).await
    }
}
