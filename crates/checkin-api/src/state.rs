//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use checkin_core::config::AppConfig;
use checkin_core::traits::{IdentityResolver, NotificationSink};
use checkin_database::Database;
use checkin_service::{CheckInEngine, TokenStore, WriterLock};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Services ─────────────────────────────────────────────
    /// Sign-in state machine
    pub engine: Arc<CheckInEngine>,
    /// One-time credential tokens
    pub tokens: Arc<TokenStore>,
    /// Identity resolution for first-time check-ins
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    /// Wires the services around one shared writer lock.
    pub fn new(
        config: AppConfig,
        db: Arc<Database>,
        identity: Arc<dyn IdentityResolver>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let lock = Arc::new(WriterLock::new(&config.lock));
        let engine = Arc::new(CheckInEngine::new(
            Arc::clone(&db),
            Arc::clone(&lock),
            notifier,
        ));
        let tokens = Arc::new(TokenStore::new(db, lock));
        Self {
            config: Arc::new(config),
            engine,
            tokens,
            identity,
        }
    }
}
