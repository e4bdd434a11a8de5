//! shimmy-relay - minimal HTTP relay for Shimmy
//!
//! Listens on `PORT` (default 3000) and forwards chat completion and model
//! listing requests to `SHIMMY_BASE_URL` (default http://localhost:11435).

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shimmy_relay::{proxy::run_server, Config};

#[derive(Parser)]
#[command(name = "shimmy-relay")]
#[command(about = "Forward OpenAI-style requests to a Shimmy server")]
#[command(
    long_about = "Forward OpenAI-style requests to a Shimmy server.\n\n\
    Configured through the environment:\n  \
    PORT             listen port (default 3000)\n  \
    SHIMMY_BASE_URL  upstream base URL (default http://localhost:11435)"
)]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shimmy_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let _cli = Cli::parse();

    let config = Config::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;
    tracing::info!(
        port = config.listen_port,
        upstream = %config.upstream_base_url,
        "Loaded configuration"
    );

    run_server(config).await
}
