//! Binary crate for the forecast relay HTTP server.
//!
//! This crate focuses on:
//! - Process bootstrap (configuration, logging)
//! - HTTP routing
//! - Mapping gateway results onto HTTP responses

use std::sync::Arc;

use anyhow::Context;
use forecast_core::{ForecastGateway, ServerConfig, config::API_KEY_VAR};
use tracing::{info, warn};

mod error;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    if !config.has_api_key() {
        warn!("{} is not set, forecast requests will fail until it is configured", API_KEY_VAR);
    }

    let gateway = Arc::new(ForecastGateway::new(config.api_key.clone()));
    let app = routes::create_router(gateway);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, "forecast relay listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
