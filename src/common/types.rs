//! ステータス型定義
//!
//! プローブ結果とページ描画に使う型。リクエストごとに生成され、
//! レスポンス送信後に破棄される（永続化なし）。

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 到達不能サービスのバージョン表示プレースホルダ
pub const VERSION_UNAVAILABLE: &str = "N/A";

/// プローブ結果
///
/// 不変条件: `reachable == false` のとき `version` はプレースホルダで
/// `error` は必ず設定される。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceStatus {
    /// サービス名（表示用）
    pub name: String,
    /// 接続に成功したか
    pub reachable: bool,
    /// サービスのバージョン文字列（到達不能時は "N/A"）
    pub version: String,
    /// 失敗時のエラーメッセージ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceStatus {
    /// 接続成功の結果を作成
    pub fn reachable(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reachable: true,
            version: version.into(),
            error: None,
        }
    }

    /// 接続失敗の結果を作成
    pub fn unreachable(name: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            name: name.into(),
            reachable: false,
            version: VERSION_UNAVAILABLE.to_string(),
            error: Some(error.to_string()),
        }
    }
}

/// ランタイム情報
///
/// リクエスト時点のサーバー環境メタデータ。タイムスタンプは
/// ハンドラーで採取してからレンダラーに渡す（レンダラーは純粋関数）。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// サーバーソフトウェア文字列
    pub server_software: String,
    /// クレートバージョン
    pub runtime_version: String,
    /// ドキュメントルート（プロセスの作業ディレクトリ）
    pub document_root: String,
    /// サーバー時刻
    pub server_time: DateTime<Utc>,
}

impl RuntimeInfo {
    /// 現在のプロセス環境からランタイム情報を採取
    pub fn capture() -> Self {
        let document_root = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            server_software: format!("stackstatus/{} (axum)", env!("CARGO_PKG_VERSION")),
            runtime_version: env!("CARGO_PKG_VERSION").to_string(),
            document_root,
            server_time: Utc::now(),
        }
    }
}

/// ケイパビリティチェック結果の1エントリ
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ExtensionStatus {
    /// ケイパビリティ名
    pub name: &'static str,
    /// このバイナリに組み込まれているか
    pub loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_status_has_no_error() {
        let status = ServiceStatus::reachable("MySQL", "8.4.0");
        assert!(status.reachable);
        assert_eq!(status.version, "8.4.0");
        assert!(status.error.is_none());
    }

    #[test]
    fn unreachable_status_satisfies_invariant() {
        let status = ServiceStatus::unreachable("Redis", "connection refused");
        assert!(!status.reachable);
        assert_eq!(status.version, VERSION_UNAVAILABLE);
        assert_eq!(status.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn serialized_status_omits_absent_error() {
        let status = ServiceStatus::reachable("MySQL", "8.4.0");
        let json = serde_json::to_value(&status).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["reachable"], true);
    }

    #[test]
    fn runtime_info_capture_reports_crate_version() {
        let info = RuntimeInfo::capture();
        assert_eq!(info.runtime_version, env!("CARGO_PKG_VERSION"));
        assert!(info.server_software.starts_with("stackstatus/"));
        assert!(!info.document_root.is_empty());
    }
}
