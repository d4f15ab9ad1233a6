mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let config = HostConfig::from_env(leptos_options.site_addr)?;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(addr = %config.addr, "timeline listening");
    axum::serve(listener, app).await?;
    Ok(())
}
