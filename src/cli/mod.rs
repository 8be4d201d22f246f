//! CLI module for stackstatus
//!
//! Provides the command-line interface for the status page server.

use clap::Parser;

/// stackstatus - Server-rendered status page for a MySQL + Redis stack
#[derive(Parser, Debug, Clone)]
#[command(name = "stackstatus")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    STACKSTATUS_HOST    Bind address (default: 0.0.0.0)
    STACKSTATUS_PORT    Listen port (default: 8080)
    STACKSTATUS_LOG     Log filter (default: info)
    MYSQL_HOST          Database host (default: mysql)
    MYSQL_DATABASE      Database name (default: myapp)
    MYSQL_USER          Database user (default: myuser)
    MYSQL_PASSWORD      Database password (default: empty)
    REDIS_HOST          Cache host (default: redis)
"#)]
pub struct Cli {
    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "STACKSTATUS_HOST")]
    pub host: String,

    /// Listen port
    #[arg(short, long, default_value = "8080", env = "STACKSTATUS_PORT")]
    pub port: u16,
}

impl Cli {
    /// バインド先アドレス文字列を返す
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
