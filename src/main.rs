//! Server control panel proxy.
//!
//! ```text
//!     Front-end                 ┌──────────────────────────────────┐
//!     ─────────────────────────▶│  /api/check-mc ──────────────────┼──▶ status API (VPS)
//!                               │  /api/start   ─┐                 │
//!                               │  /api/status  ─┴─ x-app-auth ────┼──▶ IDCloudHost VM API
//!     ◀─────────────────────────│  fixed JSON shapes               │
//!                               └──────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use panel_proxy::config::load_config;
use panel_proxy::observability::{logging, metrics};
use panel_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "panel-proxy", version)]
#[command(about = "Proxy between the control panel front-end and its upstream APIs", long_about = None)]
struct Cli {
    /// Optional TOML config file; APP_PASSWORD and IDCLOUDHOST_* override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "panel-proxy starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        status_url = %config.status.url,
        status_timeout_ms = config.status.timeout_ms,
        vm_api = %config.vm.api_base_url,
        vm_timeout_secs = config.vm.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // Held until exit; OS signals drive shutdown for the binary.
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
