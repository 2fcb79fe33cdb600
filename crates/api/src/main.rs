use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use starchart_catalog::CatalogClient;
use starchart_core::catalog::Catalog;
use starchart_core::store::{MemoryOverrideStore, OverrideStore};
use starchart_db::PgOverrideStore;
use starchart_enrichment::{PlanetService, SpeciesService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starchart_api::config::ServerConfig;
use starchart_api::router::build_app_router;
use starchart_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starchart_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Catalog client ---
    let catalog: Arc<dyn Catalog> = Arc::new(
        CatalogClient::new(
            config.catalog_base_url.clone(),
            Duration::from_secs(config.catalog_timeout_secs),
        )
        .expect("Failed to build catalog HTTP client"),
    );
    tracing::info!(base_url = %config.catalog_base_url, "Catalog client created");

    // --- Override store ---
    let store = build_override_store(&config).await;

    // --- Services ---
    let planets = PlanetService::new(Arc::clone(&catalog), Arc::clone(&store));
    let species = SpeciesService::new(Arc::clone(&catalog), planets.clone());

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        species,
        planets,
        store,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Pick the override store: PostgreSQL when `DATABASE_URL` is set,
/// process memory otherwise.
async fn build_override_store(config: &ServerConfig) -> Arc<dyn OverrideStore> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, destruction overrides will not survive a restart");
        return Arc::new(MemoryOverrideStore::new());
    };

    let pool = starchart_db::create_pool(database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    starchart_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    starchart_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    Arc::new(PgOverrideStore::new(pool))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
