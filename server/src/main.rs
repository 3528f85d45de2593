//! Voyagen server: loads settings from the environment (and `.env`), opens the user store,
//! and serves the users API.
//!
//! Run from repo root: `cargo run -p voyagen-server`

use tokio::net::TcpListener;
use voyagen_backend::{app_router, open_store, AppState, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("voyagen_backend=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(
        storage = ?settings.storage,
        id_scheme = ?settings.id_scheme,
        update_name_policy = ?settings.update_name_policy,
        "starting"
    );

    let store = open_store(&settings).await?;
    let state = AppState::new(store, &settings);
    let app = app_router(state, &settings);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
