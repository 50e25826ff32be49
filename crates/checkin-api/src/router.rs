//! Route table.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers::{checkin, health, qrcode};
use crate::state::AppState;

/// Builds the router with every endpoint.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // ── Check-in ─────────────────────────────────────────────
        .route("/sign", post(checkin::sign))
        .route("/update", post(checkin::update))
        .route("/query", get(checkin::query))
        .route("/signs", get(checkin::list_signs))
        .route("/stats", get(checkin::stats))
        // ── Credentials ──────────────────────────────────────────
        .route("/new_qrcode", post(qrcode::new_qrcode))
        // ── Health ───────────────────────────────────────────────
        .route("/health", get(health::health));

    Router::new()
        .nest("/api", api)
        // Public, unauthenticated
        .route("/qrcode/{token}", get(qrcode::qrcode_page))
        .with_state(state)
}
