//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! プローブの失敗はここで型付けされ、ハンドラーまでは伝播しない。
//! 呼び出し側は [`crate::common::ServiceStatus`] に畳み込む。

use thiserror::Error;

/// Probe error type
///
/// Covers everything a single connection-and-version-query attempt can
/// fail with: host unreachable, auth failure, protocol mismatch, timeout.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Database connection or query error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Cache connection or command error
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_message_includes_source() {
        let err = ProbeError::from(sqlx::Error::PoolTimedOut);
        let message = err.to_string();
        assert!(message.starts_with("database error:"), "{message}");
    }

    #[test]
    fn cache_error_message_includes_source() {
        let source = redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"));
        let err = ProbeError::from(source);
        let message = err.to_string();
        assert!(message.starts_with("cache error:"), "{message}");
        assert!(message.contains("connection refused"), "{message}");
    }
}
