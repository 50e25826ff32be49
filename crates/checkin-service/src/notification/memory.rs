//! In-memory notification sink.

use async_trait::async_trait;
use tokio::sync::Mutex;

use checkin_core::result::AppResult;
use checkin_core::traits::NotificationSink;

/// Records every line it receives, in order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    lines: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received so far.
    pub async fn lines(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }
}

#[async_trait]
impl NotificationSink for MemoryNotifier {
    async fn notify(&self, line: &str) -> AppResult<()> {
        self.lines.lock().await.push(line.to_string());
        Ok(())
    }
}
