//! ステータスページのHTMLレンダリング
//!
//! maud による純粋関数群。同じ入力からはバイト単位で同一の出力を生成する
//! （タイムスタンプも入力の一部として受け取る）。外部アセットへの参照は
//! 持たず、スタイルはすべてインラインで埋め込む。

use crate::common::{ExtensionStatus, RuntimeInfo, ServiceStatus};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// ページタイトル
const PAGE_TITLE: &str = "Stack Status";

/// サブタイトル
const PAGE_SUBTITLE: &str = "MySQL + Redis service stack at a glance";

/// Inline CSS for the status page.
///
/// Card grid with binary badges, an info section and a footer. No external
/// assets; the document is fully self-contained.
const PAGE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 20px;
}
.container {
    background: white;
    border-radius: 20px;
    padding: 40px;
    max-width: 800px;
    box-shadow: 0 20px 60px rgba(0,0,0,0.3);
}
h1 { color: #333; margin-bottom: 10px; font-size: 2.5em; }
.subtitle { color: #666; margin-bottom: 30px; font-size: 1.1em; }
.status-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 20px;
    margin: 30px 0;
}
.status-card {
    background: #f8f9fa;
    padding: 20px;
    border-radius: 10px;
    border-left: 4px solid #667eea;
}
.status-card h3 { color: #333; margin-bottom: 10px; font-size: 1.1em; }
.status-card p { color: #666; font-size: 0.9em; }
.status-card .detail { margin-top: 5px; font-size: 0.8em; }
.success { color: #28a745; font-weight: bold; }
.error { color: #dc3545; font-weight: bold; }
.info-section {
    background: #e9ecef;
    padding: 20px;
    border-radius: 10px;
    margin-top: 20px;
}
.info-section h3 { color: #333; margin-bottom: 15px; }
.info-item {
    display: flex;
    justify-content: space-between;
    padding: 8px 0;
    border-bottom: 1px solid #dee2e6;
}
.info-item:last-child { border-bottom: none; }
.label { font-weight: 600; color: #555; }
.value { color: #667eea; font-family: 'Courier New', monospace; }
.badges { margin-top: 10px; }
.footer {
    text-align: center;
    margin-top: 30px;
    padding-top: 20px;
    border-top: 2px solid #e9ecef;
    color: #666;
}
.badge {
    display: inline-block;
    padding: 4px 12px;
    border-radius: 20px;
    font-size: 0.85em;
    font-weight: 600;
    margin-right: 4px;
}
.badge-success { background: #d4edda; color: #155724; }
.badge-danger { background: #f8d7da; color: #721c24; }
"#;

/// プローブ結果1件のステータスカード
fn service_card(status: &ServiceStatus) -> Markup {
    let (class, text) = if status.reachable {
        ("success", "\u{2713} Connected")
    } else {
        ("error", "\u{2717} Failed")
    };

    html! {
        div class="status-card" {
            h3 { (status.name) }
            p class=(class) { (text) }
            p class="detail" { "Version: " (status.version) }
        }
    }
}

/// 常に稼働扱いのレイヤー用の静的カード
///
/// 実際のチェックは行わない（設計上の既知の不正確さ）。
fn static_card(title: &str, detail: &str) -> Markup {
    html! {
        div class="status-card" {
            h3 { (title) }
            p class="success" { "\u{2713} Running" }
            p class="detail" { (detail) }
        }
    }
}

/// System Information セクションの1行
fn info_row(label: &str, value: &str) -> Markup {
    html! {
        div class="info-item" {
            span class="label" { (label) ":" }
            span class="value" { (value) }
        }
    }
}

/// ケイパビリティチェックリストのバッジ列（チェックリスト順を保持）
fn capability_badges(extensions: &[ExtensionStatus]) -> Markup {
    html! {
        div class="badges" {
            @for ext in extensions {
                @if ext.loaded {
                    span class="badge badge-success" { "\u{2713} " (ext.name) }
                } @else {
                    span class="badge badge-danger" { "\u{2717} " (ext.name) }
                }
                " "
            }
        }
    }
}

/// ステータスページ全体をレンダリング
///
/// 入力だけに依存する純粋関数。ステータスカード、ランタイム・リバース
/// プロキシの静的カード、システム情報、ケイパビリティ一覧を出力する。
pub fn render_status_page(
    statuses: &[ServiceStatus],
    runtime: &RuntimeInfo,
    extensions: &[ExtensionStatus],
) -> Markup {
    let server_time = runtime.server_time.format("%Y-%m-%d %H:%M:%S").to_string();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                div class="container" {
                    h1 { "\u{1F680} " (PAGE_TITLE) }
                    p class="subtitle" { (PAGE_SUBTITLE) }

                    div class="status-grid" {
                        @for status in statuses {
                            (service_card(status))
                        }
                        (static_card("stackstatus", &format!("Version: {}", runtime.runtime_version)))
                        (static_card("Nginx", "Reverse Proxy"))
                    }

                    div class="info-section" {
                        h3 { "System Information" }
                        (info_row("Server Software", &runtime.server_software))
                        (info_row("Runtime Version", &runtime.runtime_version))
                        (info_row("Document Root", &runtime.document_root))
                        (info_row("Server Time", &server_time))
                    }

                    div class="info-section" {
                        h3 { "Built-in Capabilities" }
                        (capability_badges(extensions))
                    }

                    div class="footer" {
                        p { strong { "stackstatus" } " \u{2014} service connectivity report" }
                    }
                }
            }
        }
    }
}
