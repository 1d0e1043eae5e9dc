use clap::Parser;
use poker_equity_server::{
    config::ServerConfig,
    poker_server::{ServerState, app},
};
use tokio::signal;
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::parse();
    let state = ServerState::new(config.evaluator_config(), config.static_dir.clone());

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    event!(Level::INFO, addr = %listener.local_addr()?, ?config, "listening");

    // Create the server
    let server = axum::serve(listener, app(state));

    // Handle graceful shutdown on Ctrl+C
    tokio::select! {
        result = server => {
            if let Err(err) = result {
                event!(Level::ERROR, error = %err, "server_error");
                return Err(err);
            }
        }
        _ = signal::ctrl_c() => {
            event!(Level::INFO, "shutting_down");
        }
    }
    Ok(())
}
