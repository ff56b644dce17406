//! Server setup and initialization
//!
//! Provides the application builder and the server runner.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use lab_common::{AppConfig, AppError, JwtService};
use lab_db::create_pool;
use lab_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Schema directory, relative to the working directory
const MIGRATIONS_DIR: &str = "migrations";

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let router = create_router(state.config())?;
    let router = apply_middleware(router, state.config());
    Ok(router.with_state(state))
}

/// Connect to PostgreSQL, optionally migrate, and wire the services
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config =
        lab_db::DatabaseConfig::from_settings(&config.database, config.app.env.is_production());
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!(dir = MIGRATIONS_DIR, "Applying migrations");
        lab_db::run_migrations(&pool, Path::new(MIGRATIONS_DIR))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.expires_in_secs,
    ));

    let service_context = ServiceContext::postgres(pool, jwt_service);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl+C / SIGTERM
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{}", address);

    // Connect info backs the rate limiter when no X-Forwarded-For is present
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &address).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
