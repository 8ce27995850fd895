mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod logging;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    config.log_startup();

    let addr = config.bind_addr();
    let port = config.service_port;
    let state = AppState::new(&config);
    let router = app::build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(port, "Application has started");

    axum::serve(listener, router).await?;

    Ok(())
}
