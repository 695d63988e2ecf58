#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "agent-dashboard failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    tracing::info!(identity_url = %config.identity.url, "identity provider configured");

    let app = routes::app(config.identity)?;
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "agent-dashboard listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
