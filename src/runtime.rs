//! ランタイムケイパビリティ一覧
//!
//! 元のスタックページが表示していた「ロード済み拡張」のチェックリスト。
//! このバイナリに組み込まれたドライバ・バックエンドを固定順で照合する。

use crate::common::ExtensionStatus;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// ページに表示するケイパビリティの固定チェックリスト（表示順）
pub const CAPABILITY_CHECKLIST: &[&str] = &[
    "mysql",
    "redis",
    "rustls",
    "tracing",
    "serde_json",
    "maud",
    "http2",
];

/// このバイナリに組み込まれているケイパビリティ
///
/// コンパイル時に決まる。http2 はこのビルドでは有効化していない。
static LOADED_CAPABILITIES: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from(["mysql", "redis", "rustls", "tracing", "serde_json", "maud"])
});

/// 組み込み済みケイパビリティの集合を返す
pub fn loaded_capabilities() -> &'static BTreeSet<&'static str> {
    &LOADED_CAPABILITIES
}

/// チェックリストを `loaded` 集合と照合した結果を表示順で返す
pub fn capability_report_with(loaded: &BTreeSet<&str>) -> Vec<ExtensionStatus> {
    CAPABILITY_CHECKLIST
        .iter()
        .copied()
        .map(|name| ExtensionStatus {
            name,
            loaded: loaded.contains(name),
        })
        .collect()
}

/// このバイナリのケイパビリティレポートを表示順で返す
pub fn capability_report() -> Vec<ExtensionStatus> {
    capability_report_with(loaded_capabilities())
}
