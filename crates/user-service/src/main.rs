//! User Service Server
//!
//! An async Rust server that lists and registers users stored in a
//! local SQLite database, serves the home page, and answers health checks.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service::{
    config::{AppConfig, DatabaseConfig},
    db::{apply_migrations, create_pool, DbPool},
    router::build_router,
    state::AppState,
    template::PageRenderer,
    ResultExt,
};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(version, about = "User list and registration server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Commands {
    /// Apply pending schema migrations, then serve HTTP (default)
    #[default]
    Serve,

    /// Apply pending schema migrations and exit
    Migrate,
}

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the database and bring its schema up to date.
///
/// Any failure here is fatal: the server never starts on a database it
/// cannot write to.
async fn prepare_database(db_config: &DatabaseConfig) -> anyhow::Result<DbPool> {
    let db_pool = create_pool(db_config)
        .await
        .log("Failed to open database")?;

    let version = apply_migrations(&db_pool)
        .await
        .log("Failed to apply migrations")?;

    tracing::info!(version, "Database schema ready");

    Ok(db_pool)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting User Service"
    );

    let app_config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load app config, using defaults");
        AppConfig::default()
    });

    let db_config = DatabaseConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load database config, using defaults");
        DatabaseConfig::default()
    });

    let db_pool = prepare_database(&db_config).await?;

    match cli.command.unwrap_or_default() {
        Commands::Migrate => {
            db_pool.close().await;
            tracing::info!("Migrations complete");
            Ok(())
        }
        Commands::Serve => serve(app_config, db_pool).await,
    }
}

/// Build the router and serve until a shutdown signal arrives.
async fn serve(app_config: AppConfig, db_pool: DbPool) -> anyhow::Result<()> {
    tracing::info!(
        host = %app_config.host,
        port = app_config.port,
        debug = app_config.debug,
        "Configuration loaded"
    );

    let pages = PageRenderer::new()?;
    let state = AppState::new(db_pool.clone(), app_config.clone(), pages);
    let app = build_router(state);

    let addr: SocketAddr = app_config.bind_address().parse()?;
    let listener = TcpListener::bind(addr)
        .await
        .log("Failed to bind to address")?;

    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
