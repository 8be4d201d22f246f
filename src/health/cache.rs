//! キャッシュ（Redis）プローブ
//!
//! 接続して `INFO server` を1回だけ実行し、`redis_version` を取り出す。

use crate::common::{ProbeError, ServiceStatus};
use crate::config::CacheConfig;
use tracing::{debug, warn};

/// ステータスカードに表示するサービス名
pub const SERVICE_NAME: &str = "Redis";

/// INFO応答にバージョンが含まれない場合の表示
const VERSION_UNKNOWN: &str = "Unknown";

/// キャッシュプローブ
#[derive(Debug, Clone)]
pub struct CacheChecker {
    config: CacheConfig,
}

impl CacheChecker {
    /// 新しいプローブを作成
    pub fn new(config: CacheConfig) -> Self {
        Self { config }
    }

    /// 1回だけ接続を試み、結果をステータスに畳み込む
    pub async fn check(&self) -> ServiceStatus {
        match self.try_check().await {
            Ok(version) => {
                debug!(host = %self.config.host, version = %version, "Cache probe succeeded");
                ServiceStatus::reachable(SERVICE_NAME, version)
            }
            Err(e) => {
                warn!(host = %self.config.host, error = %e, "Cache probe failed");
                ServiceStatus::unreachable(SERVICE_NAME, e)
            }
        }
    }

    /// 接続して `INFO server` からバージョン文字列を取得
    async fn try_check(&self) -> Result<String, ProbeError> {
        let url = format!("redis://{}:{}/", self.config.host, self.config.port);
        let client = redis::Client::open(url)?;
        let mut conn = client.get_multiplexed_async_connection().await?;

        let info: String = redis::cmd("INFO")
            .arg("server")
            .query_async(&mut conn)
            .await?;

        Ok(parse_redis_version(&info).unwrap_or_else(|| VERSION_UNKNOWN.to_string()))
    }
}

/// `INFO server` 応答から `redis_version` フィールドを取り出す
fn parse_redis_version(info: &str) -> Option<String> {
    info.lines()
        .find_map(|line| line.strip_prefix("redis_version:"))
        .map(|version| version.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::VERSION_UNAVAILABLE;

    #[test]
    fn parses_version_from_info_payload() {
        let info = "# Server\r\nredis_version:7.2.4\r\nredis_mode:standalone\r\n";
        assert_eq!(parse_redis_version(info).as_deref(), Some("7.2.4"));
    }

    #[test]
    fn missing_version_field_yields_none() {
        let info = "# Server\r\nredis_mode:standalone\r\n";
        assert_eq!(parse_redis_version(info), None);
    }

    #[tokio::test]
    async fn unreachable_host_folds_into_failed_status() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind probe port");
        let port = listener.local_addr().expect("no local addr").port();
        drop(listener);

        let config = CacheConfig {
            host: "127.0.0.1".to_string(),
            port,
        };

        let status = CacheChecker::new(config).check().await;

        assert_eq!(status.name, SERVICE_NAME);
        assert!(!status.reachable);
        assert_eq!(status.version, VERSION_UNAVAILABLE);
        assert!(status.error.is_some());
    }
}
