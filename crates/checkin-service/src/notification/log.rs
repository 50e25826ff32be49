//! Log notification sink.

use async_trait::async_trait;
use tracing::info;

use checkin_core::result::AppResult;
use checkin_core::traits::NotificationSink;

/// Writes every notification line to the application log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify(&self, line: &str) -> AppResult<()> {
        info!(target: "checkin::notify", "{line}");
        Ok(())
    }
}
