// ABOUTME: Entry point for the verdant binary.
// ABOUTME: Parses CLI arguments, initializes tracing, registers agents, and starts the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use verdant_server::app_state::default_registry;
use verdant_server::{AppState, VerdantConfig, create_router};

/// Serve verdant's agent tools over HTTP.
#[derive(Debug, Parser)]
#[command(name = "verdant", version, about)]
struct Cli {
    /// Interface or hostname to listen on (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// TCP port to listen on (overrides PORT).
    #[arg(long, short)]
    port: Option<u16>,

    /// Per-request execution budget in milliseconds (overrides VERDANT_AGENT_TIMEOUT_MS).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "verdant=debug,verdant_server=debug,verdant_core=debug,verdant_agents=debug,tower_http=debug"
                    .into()
            }),
        )
        .init();

    let cli = Cli::parse();
    let mut config = VerdantConfig::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(ms) = cli.timeout_ms {
        config.agent_timeout = Duration::from_millis(ms);
    }

    let registry = default_registry(config.generator).await;
    tracing::info!(agents = ?registry.names().await, "agents registered");

    let state = Arc::new(AppState::new(registry, config.agent_timeout));
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %listener.local_addr()?, "verdant listening");

    axum::serve(listener, app).await?;
    Ok(())
}
