//! Sortvis Server
//!
//! Load a sort run and serve playback controls.
//!
//! Usage: `sortvis [algorithm] [size] [port]`

use sortvis_server::{ServerConfig, VisServer};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortvis=info,sortvis_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = ServerConfig::from_env()?.apply_args(&args)?;

    tracing::info!(
        algorithm = %config.algorithm,
        engine = %config.engine,
        size = config.array_size,
        "Starting sortvis"
    );

    let server = VisServer::new(config)?;
    server.serve().await?;

    Ok(())
}
