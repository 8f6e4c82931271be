//! Sound-gate application host.
//!
//! Serves the single-page application shell so that every routed path
//! survives a browser reload under web history.
//!
//! ```text
//!   Browser ──GET /home──▶ http::server ──▶ history (strip base)
//!                                       ──▶ routing::RouteTable
//!   Browser ◀─200 shell (data-view="landing") / 404
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use soundgate_router::config::{load_config, AppConfig};
use soundgate_router::observability::init_logging;
use soundgate_router::{HttpServer, Router, Shutdown};

#[derive(Parser)]
#[command(name = "soundgate-router")]
#[command(about = "Host the sound-gate single-page application", long_about = None)]
struct Cli {
    /// TOML config file; built-in route table when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }

    init_logging(&config.observability)?;
    tracing::info!("soundgate-router v{} starting", env!("CARGO_PKG_VERSION"));

    let router = Router::from_config(&config.router);
    for entry in router.table().entries() {
        tracing::info!(path = %entry.path, view = %entry.view, "Route registered");
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
