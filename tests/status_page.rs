//! ステータスページの Integration Tests
//!
//! 依存サービスが落ちていてもページは常に 200 OK を返すことを
//! HTTPレベルで検証する。

use axum::body::Body;
use axum::http::{Request, StatusCode};
use stackstatus::config::{CacheConfig, DatabaseConfig};
use stackstatus::{api, AppState};
use tower::ServiceExt;

/// 直前までバインドされていたポートを返す（接続拒否が期待できる）
async fn refused_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind probe port");
    let port = listener.local_addr().expect("no local addr").port();
    drop(listener);
    port
}

/// 両依存が到達不能なアプリケーション状態を構築
async fn unreachable_state() -> AppState {
    AppState {
        database: DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: refused_port().await,
            ..DatabaseConfig::default()
        },
        cache: CacheConfig {
            host: "127.0.0.1".to_string(),
            port: refused_port().await,
        },
    }
}

async fn get_page(state: AppState) -> (StatusCode, String, String) {
    let app = api::create_app(state);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .expect("request should not fail");

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let html = String::from_utf8(body.to_vec()).expect("body should be utf-8");

    (status, content_type, html)
}

#[tokio::test]
async fn page_returns_200_html_when_both_services_are_down() {
    let (status, content_type, html) = get_page(unreachable_state().await).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"), "{content_type}");

    // 両サービスとも赤バッジ + プレースホルダバージョン
    assert_eq!(html.matches("\u{2717} Failed").count(), 2, "{html}");
    assert_eq!(html.matches("Version: N/A").count(), 2);
    assert!(html.contains("MySQL"));
    assert!(html.contains("Redis"));
}

#[tokio::test]
async fn page_always_carries_static_cards_and_capabilities() {
    let (status, _, html) = get_page(unreachable_state().await).await;

    assert_eq!(status, StatusCode::OK);

    // ランタイムとリバースプロキシのカードはチェックなしで常に Running
    assert_eq!(html.matches("\u{2713} Running").count(), 2);
    assert!(html.contains("Reverse Proxy"));

    // ケイパビリティ一覧は固定チェックリスト全量を表示する
    for name in stackstatus::runtime::CAPABILITY_CHECKLIST {
        assert!(html.contains(name), "capability {name} missing");
    }

    // システム情報セクション
    assert!(html.contains("System Information"));
    assert!(html.contains("Server Time"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = api::create_app(unreachable_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("request should not fail");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
