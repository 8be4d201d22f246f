//! 共通型定義
//!
//! ステータスページ全体で使う型とエラー

/// エラー型
pub mod error;

/// ステータス型
pub mod types;

pub use error::ProbeError;
pub use types::{ExtensionStatus, RuntimeInfo, ServiceStatus};
