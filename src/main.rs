use anyhow::Result;
use std::net::SocketAddr;

use onyxs_backend::config::Settings;
use onyxs_backend::db::DbPool;
use onyxs_backend::routes;
use onyxs_backend::state::AppState;
use onyxs_backend::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    telemetry::init();

    // Load configuration
    let config = Settings::load()?;
    config.validate().map_err(anyhow::Error::msg)?;
    tracing::info!(
        port = config.port,
        environment = %config.node_env,
        "Configuration loaded"
    );

    // Initialize database connection pool (lazy: first connection on first query)
    let db_pool = DbPool::new(&config);
    tracing::info!(
        host = %config.db_host,
        port = config.db_port,
        database = %config.db_name,
        "Database configured"
    );

    // Test database connection in the background; a failure is logged and
    // never prevents the server from starting.
    let probe_pool = db_pool.clone();
    tokio::spawn(async move {
        match probe_pool.server_time().await {
            Ok(now) => tracing::info!(connected_at = %now, "Database connected successfully"),
            Err(e) => tracing::error!(error = %e, "Database connection error"),
        }
    });

    // Create router and start server
    let app = routes::create_router(AppState::new(db_pool));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(addr = %addr, "Server running");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
