//! City weather HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{CityService, HealthService, WeatherService};
use infrastructure::{
    AppConfig, AsyncDatabase, HttpWeatherProvider, SqliteCityStore, SqliteDatabaseHealth,
    init_logging,
};
use presentation_http::{routes, server, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.server).context("failed to initialize logging")?;

    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!(version = env!("CARGO_PKG_VERSION"), "City weather server starting");
    info!(
        host = %config.server.host,
        port = config.server.port,
        database = %config.database.url,
        weather_api = %config.weather.base_url,
        "Configuration loaded"
    );

    let database = AsyncDatabase::new(&(&config.database).into())
        .await
        .context("failed to open database")?;

    if config.database.run_migrations {
        database
            .migrate()
            .await
            .context("failed to run database migrations")?;
    }

    let store = Arc::new(SqliteCityStore::new(database.pool().clone()));
    let provider = Arc::new(
        HttpWeatherProvider::new(config.weather.clone())
            .context("failed to create weather client")?,
    );

    let state = AppState {
        city_service: Arc::new(CityService::new(store.clone())),
        weather_service: Arc::new(WeatherService::new(store, provider)),
        health_service: Arc::new(HealthService::new(Arc::new(SqliteDatabaseHealth::new(
            database.pool().clone(),
        )))),
    };

    let app = routes::create_app(state, &config.server);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(address = %addr, "Server listening");
    info!("API docs at http://{addr}/swagger-ui");

    let outcome = server::serve(
        listener,
        app,
        shutdown_signal(),
        Duration::from_secs(config.server.shutdown_timeout_secs),
    )
    .await?;

    database.close().await;
    info!(?outcome, "Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
