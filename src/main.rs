//! Exam check-in server
//!
//! Main entry point that wires all crates together and starts the server.

mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use checkin_api::{AppState, build_app};
use checkin_core::config::AppConfig;
use checkin_core::error::AppError;
use checkin_database::Database;
use checkin_service::notification::LogNotifier;
use checkin_service::{CheckInEngine, WriterLock, identity, notification};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Loaded config from '{}' (env: {})", cli.config, cli.env);

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run(config).await,
        Commands::Stats => print_stats(config).await,
    };

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting exam check-in v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Open the document store ──────────────────────────
    tracing::info!(
        "Opening document store (backend: {:?}, path: {})...",
        config.store.backend,
        config.store.path
    );
    let db = Arc::new(Database::from_config(&config.store).await?);

    // ── Step 2: External collaborators ───────────────────────────
    let identity = identity::from_config(&config.identity)?;
    if config.identity.endpoint.is_none() {
        tracing::warn!("No identity endpoint configured, participants get placeholder names");
    }
    let notifier = notification::from_config(&config.notify)?;

    // ── Step 3: Services and router ──────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, db, identity, notifier);
    let app = build_app(state);

    // ── Step 4: Serve until ctrl-c ───────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::internal(format!("Server failed: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Print pool counters and exit
async fn print_stats(config: AppConfig) -> Result<(), AppError> {
    let db = Arc::new(Database::from_config(&config.store).await?);
    let engine = CheckInEngine::new(
        db,
        Arc::new(WriterLock::new(&config.lock)),
        Arc::new(LogNotifier),
    );
    let stats = engine.stats().await?;

    println!(
        "accounts bound: {}/{}",
        stats.bound_participants, stats.total_participants
    );
    println!("signs: {}", stats.signs);
    println!("seats used: {}/{}", stats.used_seats, stats.total_seats);
    tracing::debug!(stats = %serde_json::to_string(&stats)?, "Pool stats");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
