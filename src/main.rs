//! UserAPI - A minimal user CRUD service
//!
//! Persists users as Redis hashes and exposes create/read/update/delete over
//! HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_api::api::{create_router, AppState};
use user_api::config::Config;
use user_api::store::{DisabledStore, RedisUserStore, StoreStatus, UserStore};

/// Main entry point for the UserAPI server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to Redis (degrading instead of exiting on failure)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting UserAPI server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, redis={}, environment={}",
        config.server_port,
        config.redis_url(),
        config.environment
    );

    // Connect to Redis. A failed connection is not fatal: the process keeps
    // serving in degraded mode, where lookups report not-found and writes
    // fail with an internal error. The ConnectionManager reconnects on its
    // own if an established connection drops later.
    let (store, store_status): (Arc<dyn UserStore>, StoreStatus) =
        match RedisUserStore::connect(&config.redis_url()).await {
            Ok(store) => {
                info!("Connected to Redis at {}", config.redis_url());
                (Arc::new(store), StoreStatus::Connected)
            }
            Err(err) => {
                error!("Could not connect to Redis: {}", err);
                warn!("Serving in degraded mode without a backend");
                (Arc::new(DisabledStore), StoreStatus::Disabled)
            }
        };

    // Create application state; the store handle lives here for the whole
    // process and drops when the server future resolves.
    let state = AppState::new(store, config.environment.clone(), store_status);

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
