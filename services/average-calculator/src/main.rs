mod config;
mod error;
mod handlers;
mod models;
mod router;
mod source;
mod state;

use config::AppConfig;
use number_window::NumberWindow;
use router::create_router;
use source::HttpNumberSource;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Average Calculator service");

    let config = AppConfig::from_env()?;
    let window = NumberWindow::new(config.window_size)?;
    let number_source = HttpNumberSource::new(
        config.source_table(),
        config.fetch_timeout,
        config.bearer_token.clone(),
    );
    if config.bearer_token.is_none() {
        tracing::warn!("No BEARER_TOKEN or API_TOKEN set; upstream requests are unauthenticated");
    }

    let state = AppState::new(window, Arc::new(number_source));

    // Create router
    let app = create_router(state, config.request_timeout);

    // Bind and serve
    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        window_size = config.window_size,
        fetch_timeout_ms = config.fetch_timeout.as_millis() as u64,
        "Listening on {}",
        addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
