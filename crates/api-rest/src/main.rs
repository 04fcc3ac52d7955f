//! HackHub REST API server binary.

use anyhow::Context;
use hackhub_api_rest::{create_app, init_tracing, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env();
    let address = config.server_address();
    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "HackHub REST API listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
