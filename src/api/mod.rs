//! HTTPハンドラー
//!
//! ルーティングは `GET /` の1本のみ。

/// ステータスページハンドラー
pub mod status;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// アプリケーションのルーターを構築
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::status_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
