//! ステータスページハンドラー
//!
//! GET / — 依存サービスをプローブし、HTMLドキュメントを返す。
//! プローブの失敗はステータスカードに畳み込まれるため、
//! このハンドラーは常に 200 OK を返す。

use crate::common::RuntimeInfo;
use crate::{health, render, runtime, AppState};
use axum::extract::State;
use maud::Markup;

/// GET /
///
/// 依存サービスを並行プローブし、ランタイム情報とケイパビリティ一覧を
/// 添えてページをレンダリングする。
pub async fn status_page(State(state): State<AppState>) -> Markup {
    let statuses = health::check_all(&state).await;
    let runtime_info = RuntimeInfo::capture();
    let extensions = runtime::capability_report();

    render::render_status_page(&statuses, &runtime_info, &extensions)
}
