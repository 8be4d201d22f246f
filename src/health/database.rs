//! データベース（MySQL）プローブ
//!
//! 接続して `SELECT VERSION()` を1回だけ実行する。タイムアウトは
//! ドライバのデフォルトに任せ、明示設定はしない。

use crate::common::{ProbeError, ServiceStatus};
use crate::config::DatabaseConfig;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};
use tracing::{debug, warn};

/// ステータスカードに表示するサービス名
pub const SERVICE_NAME: &str = "MySQL";

/// データベースプローブ
#[derive(Debug, Clone)]
pub struct DatabaseChecker {
    config: DatabaseConfig,
}

impl DatabaseChecker {
    /// 新しいプローブを作成
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// 1回だけ接続を試み、結果をステータスに畳み込む
    ///
    /// 失敗はここで吸収され、呼び出し側へは伝播しない。
    pub async fn check(&self) -> ServiceStatus {
        match self.try_check().await {
            Ok(version) => {
                debug!(host = %self.config.host, version = %version, "Database probe succeeded");
                ServiceStatus::reachable(SERVICE_NAME, version)
            }
            Err(e) => {
                warn!(host = %self.config.host, error = %e, "Database probe failed");
                ServiceStatus::unreachable(SERVICE_NAME, e)
            }
        }
    }

    /// 接続してバージョン文字列を取得
    async fn try_check(&self) -> Result<String, ProbeError> {
        let options = MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database);

        let mut conn = MySqlConnection::connect_with(&options).await?;
        let version: String = sqlx::query_scalar("SELECT VERSION()")
            .fetch_one(&mut conn)
            .await?;

        // 接続はスコープ終了で解放される
        Ok(version)
    }
}
