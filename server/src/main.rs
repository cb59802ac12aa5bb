mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let options = config.apply(conf.leptos_options);
    let addr = options.site_addr;
    tracing::info!(site_root = %options.site_root, "serving site assets");

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "plantcare listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
