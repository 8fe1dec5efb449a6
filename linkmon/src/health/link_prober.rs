//! リンクプローバー本体

use crate::common::error::{LinkError, LinkResult};
use crate::config::ProbeConfig;
use crate::registry::LinkRegistry;
use crate::types::link::{Link, LinkHeaders};
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

/// 1回のプローブ結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// HTTP 200が返ったか
    pub status: bool,
    /// プローブ完了時刻
    pub checked_at: DateTime<FixedOffset>,
}

/// プローブ失敗の内訳（ログ出力専用）
#[derive(Debug, thiserror::Error)]
enum ProbeFailure {
    #[error("invalid header '{0}'")]
    InvalidHeader(String),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// リンクプローバー
#[derive(Clone)]
pub struct LinkProber {
    client: Client,
    offset: FixedOffset,
}

impl LinkProber {
    /// 新しいプローバーを作成
    pub fn new(config: ProbeConfig) -> LinkResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LinkError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            offset: config.offset,
        })
    }

    /// リンクを1回プローブ
    ///
    /// 通信エラーはログに残して`status = false`として扱い、呼び出し元には返さない。
    pub async fn probe(&self, link: &Link) -> ProbeOutcome {
        let status = match self.send(link).await {
            Ok(code) => {
                debug!(link_id = %link.id, url = %link.url, status_code = code.as_u16(), "Probe response");
                code == StatusCode::OK
            }
            Err(e) => {
                warn!(link_id = %link.id, url = %link.url, error = %e, "Probe failed");
                false
            }
        };

        ProbeOutcome {
            status,
            checked_at: Utc::now().with_timezone(&self.offset),
        }
    }

    async fn send(&self, link: &Link) -> Result<StatusCode, ProbeFailure> {
        let headers = build_header_map(&link.headers)?;
        let response = self.client.get(&link.url).headers(headers).send().await?;
        Ok(response.status())
    }

    /// リンクを先頭から順にプローブし、結果を1件ずつ記録する
    ///
    /// 途中で削除されたリンクはスキップする。それ以外のストレージエラーで中断する。
    pub async fn probe_all(
        &self,
        registry: &LinkRegistry,
        links: Vec<Link>,
    ) -> LinkResult<Vec<Link>> {
        let total = links.len();
        let mut probed = Vec::with_capacity(total);

        for link in links {
            let outcome = self.probe(&link).await;
            match registry
                .record_probe(&link.id, outcome.status, outcome.checked_at)
                .await
            {
                Ok(updated) => probed.push(updated),
                Err(LinkError::NotFound(_)) => {
                    warn!(link_id = %link.id, "Link removed during probe pass, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        let up = probed.iter().filter(|l| l.status).count();
        info!(total, probed = probed.len(), up, "Probe pass completed");
        Ok(probed)
    }
}

fn build_header_map(headers: &LinkHeaders) -> Result<HeaderMap, ProbeFailure> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ProbeFailure::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| ProbeFailure::InvalidHeader(name.clone()))?;
        // 大文字小文字違いの同名ヘッダーも上書きせずすべて送る
        map.append(header_name, header_value);
    }
    Ok(map)
}
