//! Notification sink contract.

use async_trait::async_trait;

use crate::result::AppResult;

/// Receives human-readable lines describing check-in and update events.
///
/// Delivery is fire-and-forget from the engine's point of view: a returned
/// error is logged by the caller and never aborts the operation that
/// produced the event.
#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    /// Deliver one notification line.
    async fn notify(&self, line: &str) -> AppResult<()>;
}
