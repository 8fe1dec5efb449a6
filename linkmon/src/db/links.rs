//! リンクデータベース操作

use crate::types::link::{Link, LinkHeaders};
use chrono::{DateTime, FixedOffset};
use sqlx::SqlitePool;

fn encode_headers(headers: &LinkHeaders) -> String {
    serde_json::to_string(headers).unwrap_or_else(|_| "{}".to_string())
}

/// リンクを登録
///
/// 同じIDが既に存在する場合はUNIQUE制約違反のエラーを返し、既存行は変更しない。
pub async fn create_link(pool: &SqlitePool, link: &Link) -> Result<(), sqlx::Error> {
    let last_checked = link.last_checked.map(|dt| dt.to_rfc3339());
    let headers = encode_headers(&link.headers);

    sqlx::query(
        r#"
        INSERT INTO links (id, url, status, last_checked, headers)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&link.id)
    .bind(&link.url)
    .bind(link.status)
    .bind(&last_checked)
    .bind(&headers)
    .execute(pool)
    .await?;

    Ok(())
}

/// リンク一覧を取得（格納順）
pub async fn list_links(pool: &SqlitePool) -> Result<Vec<Link>, sqlx::Error> {
    let rows = sqlx::query_as::<_, LinkRow>(
        r#"
        SELECT id, url, status, last_checked, headers
        FROM links
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// IDでリンクを取得
pub async fn get_link(pool: &SqlitePool, id: &str) -> Result<Option<Link>, sqlx::Error> {
    let row = sqlx::query_as::<_, LinkRow>(
        r#"
        SELECT id, url, status, last_checked, headers
        FROM links
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// リンクのURLとヘッダーを更新
///
/// `status`と`last_checked`はプローブ専用のため触らない。
pub async fn update_link(pool: &SqlitePool, link: &Link) -> Result<bool, sqlx::Error> {
    let headers = encode_headers(&link.headers);

    let result = sqlx::query(
        r#"
        UPDATE links SET
            url = ?, headers = ?
        WHERE id = ?
        "#,
    )
    .bind(&link.url)
    .bind(&headers)
    .bind(&link.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// プローブ結果を記録
pub async fn update_probe_result(
    pool: &SqlitePool,
    id: &str,
    status: bool,
    checked_at: DateTime<FixedOffset>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE links SET
            status = ?,
            last_checked = ?
        WHERE id = ?
        "#,
    )
    .bind(status)
    .bind(checked_at.to_rfc3339())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// リンクを削除し、削除した行を返す
///
/// 読み出しと削除は同一トランザクション内で行う。
pub async fn delete_link(pool: &SqlitePool, id: &str) -> Result<Option<Link>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, LinkRow>(
        r#"
        SELECT id, url, status, last_checked, headers
        FROM links
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        tx.rollback().await?;
        return Ok(None);
    };

    sqlx::query("DELETE FROM links WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Some(row.into()))
}

// --- Internal Row Types ---

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: String,
    url: String,
    status: bool,
    last_checked: Option<String>,
    /// ヘッダー（JSON形式）
    headers: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            url: row.url,
            status: row.status,
            last_checked: row
                .last_checked
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok()),
            headers: serde_json::from_str(&row.headers).unwrap_or_default(),
        }
    }
}
