//! Configuration management via environment variables
//!
//! Connection parameters for the probed services are read from the same
//! environment variables the stack's compose files export, with explicit
//! defaults when unset.

/// Default MySQL host.
pub const DEFAULT_MYSQL_HOST: &str = "mysql";
/// Default MySQL database name.
pub const DEFAULT_MYSQL_DATABASE: &str = "myapp";
/// Default MySQL user.
pub const DEFAULT_MYSQL_USER: &str = "myuser";
/// Default MySQL password (empty).
pub const DEFAULT_MYSQL_PASSWORD: &str = "";
/// MySQL port. Not configurable; the stack never moves it.
pub const MYSQL_PORT: u16 = 3306;

/// Default Redis host.
pub const DEFAULT_REDIS_HOST: &str = "redis";
/// Redis port. Not configurable; the stack never moves it.
pub const REDIS_PORT: u16 = 6379;

/// Get an environment variable, falling back to a default value
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value to return if the variable is not set
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default if the variable is not set or fails to parse.
pub fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// データベース接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// ホスト名 (デフォルト: "mysql")
    pub host: String,
    /// ポート番号（固定: 3306）
    pub port: u16,
    /// データベース名 (デフォルト: "myapp")
    pub database: String,
    /// ユーザー名 (デフォルト: "myuser")
    pub user: String,
    /// パスワード (デフォルト: 空)
    pub password: String,
}

impl DatabaseConfig {
    /// Load database connection settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env_or("MYSQL_HOST", DEFAULT_MYSQL_HOST),
            port: MYSQL_PORT,
            database: env_or("MYSQL_DATABASE", DEFAULT_MYSQL_DATABASE),
            user: env_or("MYSQL_USER", DEFAULT_MYSQL_USER),
            password: env_or("MYSQL_PASSWORD", DEFAULT_MYSQL_PASSWORD),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MYSQL_HOST.to_string(),
            port: MYSQL_PORT,
            database: DEFAULT_MYSQL_DATABASE.to_string(),
            user: DEFAULT_MYSQL_USER.to_string(),
            password: DEFAULT_MYSQL_PASSWORD.to_string(),
        }
    }
}

/// キャッシュ接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// ホスト名 (デフォルト: "redis")
    pub host: String,
    /// ポート番号（固定: 6379）
    pub port: u16,
}

impl CacheConfig {
    /// Load cache connection settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env_or("REDIS_HOST", DEFAULT_REDIS_HOST),
            port: REDIS_PORT,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_REDIS_HOST.to_string(),
            port: REDIS_PORT,
        }
    }
}
