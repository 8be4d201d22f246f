//! ロギング初期化ユーティリティ
//!
//! `STACKSTATUS_LOG` 環境変数でフィルタを制御する（デフォルト: info）

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "STACKSTATUS_LOG";

/// Initialize the global tracing subscriber.
///
/// Call once at process start, before any other component logs.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global subscriber: {e}"))?;

    Ok(())
}
