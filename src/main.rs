//! stackstatus Server Entry Point

use clap::Parser;
use stackstatus::cli::Cli;
use stackstatus::{logging, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    info!("stackstatus v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_env();
    info!(
        database_host = %state.database.host,
        cache_host = %state.cache.host,
        "Probe targets configured"
    );

    server::run(state, &cli.bind_addr()).await;
}
