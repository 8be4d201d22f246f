//! stackstatus Server
//!
//! MySQL / Redis スタックの接続状態を表示するステータスページサーバー

#![warn(missing_docs)]

/// 共通型定義・エラー型
pub mod common;

/// HTTPハンドラー
pub mod api;

/// 依存サービスのヘルスチェック
pub mod health;

/// ステータスページのHTMLレンダリング
pub mod render;

/// ランタイム情報・ケイパビリティ一覧
pub mod runtime;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動・シャットダウン
pub mod server;

/// アプリケーション状態
#[derive(Debug, Clone)]
pub struct AppState {
    /// データベース接続設定
    pub database: config::DatabaseConfig,
    /// キャッシュ接続設定
    pub cache: config::CacheConfig,
}

impl AppState {
    /// 環境変数から状態を構築
    pub fn from_env() -> Self {
        Self {
            database: config::DatabaseConfig::from_env(),
            cache: config::CacheConfig::from_env(),
        }
    }
}
