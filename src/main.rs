//! Server entry point.

use tracing::info;
use tracing_subscriber::EnvFilter;

use tmz_shop::api::{self, AppState};
use tmz_shop::config::ShopConfig;
use tmz_shop::store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ShopConfig::from_env();
    let store = store::shared().await;
    let state = AppState::new(store, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "shop listening");

    axum::serve(listener, api::router(state)).await?;
    Ok(())
}
