mod clubs;
mod error;
mod extract;
mod settings;
mod sqlite;

use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, serve, Json, Router};
use clubs::{ClubRepository, SqliteClubRepository};
use serde_json::{json, Value};
use settings::Settings;
use tokio::{net::TcpListener, signal, time::Instant};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    clubs: Arc<dyn ClubRepository>,
}

fn create_app(repository: Arc<dyn ClubRepository>) -> Router {
    let app_state = AppState { clubs: repository };

    Router::new()
        .route("/health", get(health))
        .merge(clubs::router())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let start = Instant::now();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    let pool = sqlite::create_pool(&settings.sqlite).await?;
    let app = create_app(Arc::new(SqliteClubRepository::new(pool)));

    let listener = TcpListener::bind(settings.server.addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    // Create a shutdown signal handler
    let shutdown = async move {
        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = signal::ctrl_c() => {},
            _ = terminate => {},
        }
        let duration = start.elapsed();
        info!("Shutting down gracefully... in {:?}", duration);
    };

    // Start the server with graceful shutdown
    serve(listener, app).with_graceful_shutdown(shutdown).await?;

    Ok(())
}
