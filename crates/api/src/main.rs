use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use persons_api::config::ServerConfig;
use persons_api::router::build_app_router;
use persons_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "persons_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

/// Start the server and block until it shuts down. Any startup failure is
/// returned so `main` can exit non-zero; there is no degraded mode.
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool =
        persons_db::create_pool(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database connection pool created");

    persons_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    persons_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // --- Router ---
    let app = build_app_router(AppState::new(pool.clone()), &config);

    // --- Start server ---
    let host: IpAddr = config.host.parse()?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
