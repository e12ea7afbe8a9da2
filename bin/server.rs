// Wedding Budget Planner - Web Server

use anyhow::{Context, Result};
use clap::Parser;
use wedding_budget::api::{router, AppState};
use wedding_budget::config::ServerConfig;
use wedding_budget::logging::init_logging;
use wedding_budget::{count_plans, open_database};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    config.validate()?;

    init_logging(&config.log_level, config.log_json)?;

    let catalog = config.load_catalog()?;
    let stats = catalog.stats();
    tracing::info!(
        venues = stats.venue_count,
        cuisines = stats.cuisine_count,
        services = stats.service_count,
        "Catalog ready"
    );

    let conn = open_database(&config.db)?;
    tracing::info!(db = %config.db, plans = count_plans(&conn)?, "Plan database opened");

    let app = router(AppState::new(catalog, conn));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!(addr = %addr, version = wedding_budget::VERSION, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
