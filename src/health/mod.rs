//! 依存サービスのヘルスチェック
//!
//! リクエストごとに各依存へ1回だけ接続を試み、成否とバージョン文字列を
//! [`ServiceStatus`] に畳み込む。リトライ・バックオフなし。

/// キャッシュ（Redis）プローブ
pub mod cache;

/// データベース（MySQL）プローブ
pub mod database;

pub use cache::CacheChecker;
pub use database::DatabaseChecker;

use crate::common::ServiceStatus;
use crate::AppState;

/// 全依存サービスをプローブして結果を返す
///
/// 2つのプローブは互いに独立なので並行実行する。順序は表示順
/// （データベース、キャッシュ）で固定。
pub async fn check_all(state: &AppState) -> Vec<ServiceStatus> {
    let database = DatabaseChecker::new(state.database.clone());
    let cache = CacheChecker::new(state.cache.clone());

    let (database_status, cache_status) = tokio::join!(database.check(), cache.check());

    vec![database_status, cache_status]
}
