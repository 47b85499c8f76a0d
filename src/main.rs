use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use geo_synth::server::{self, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("geo_synth=info".parse()?))
        .init();

    let config = ServerConfig::from_env()?;
    let app = server::router();

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
