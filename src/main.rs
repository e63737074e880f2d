use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loadbank_api::common::AppState;
use loadbank_api::config::Config;
use loadbank_api::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,loadbank_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting loadbank-api...");

    // Load configuration (every variable has a fallback)
    let config = Config::from_env()?;
    tracing::info!(
        host = %config.api_host,
        port = config.api_port,
        pool_size = config.db_max_connections,
        "Configuration loaded"
    );

    // Construct the storage gateway explicitly: a bounded lazy pool.
    // Callers queue on acquire when all connections are busy.
    let mut connect_opts = ConnectOptions::new(config.database_url.clone());
    connect_opts
        .max_connections(config.db_max_connections)
        .connect_lazy(true);
    let db = Database::connect(connect_opts).await?;

    // Startup connectivity check is advisory: the device keeps posting
    // whether or not the database is up yet, so the listener must come up
    // regardless.
    match db.ping().await {
        Ok(()) => tracing::info!("Database connection successful"),
        Err(e) => tracing::warn!("Database connection failed: {e}"),
    }

    // Create application state
    let state = AppState::new(db, config.clone());

    // Build router
    let app = routes::build_router(state);

    // Start server with graceful shutdown
    let addr = config.bind_address();
    tracing::info!(address = %addr, "Starting server");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

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
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
