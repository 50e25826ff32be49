//! Broadcast to several sinks.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use checkin_core::result::AppResult;
use checkin_core::traits::NotificationSink;

/// Delivers each line to every inner sink.
///
/// A failing sink does not stop delivery to the others; the last failure
/// is returned.
pub struct FanoutNotifier {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl FanoutNotifier {
    /// Creates a fan-out over `sinks`.
    pub fn new(sinks: Vec<Arc<dyn NotificationSink>>) -> Self {
        Self { sinks }
    }

    /// Number of inner sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether there are no inner sinks.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[async_trait]
impl NotificationSink for FanoutNotifier {
    async fn notify(&self, line: &str) -> AppResult<()> {
        let mut outcome = Ok(());
        for sink in &self.sinks {
            if let Err(e) = sink.notify(line).await {
                warn!(error = %e, "Notification sink failed");
                outcome = Err(e);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::error::{AppError, ErrorKind};

    use crate::notification::MemoryNotifier;

    struct Failing;

    #[async_trait]
    impl NotificationSink for Failing {
        async fn notify(&self, _line: &str) -> AppResult<()> {
            Err(AppError::external_service("down"))
        }
    }

    #[tokio::test]
    async fn test_failure_does_not_skip_other_sinks() {
        let memory = Arc::new(MemoryNotifier::new());
        let sinks: Vec<Arc<dyn NotificationSink>> = vec![Arc::new(Failing), memory.clone()];
        let fanout = FanoutNotifier::new(sinks);

        let err = fanout.notify("[SIGN] 1 (A) [1]1").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExternalService);
        assert_eq!(memory.lines().await, vec!["[SIGN] 1 (A) [1]1"]);
    }

    #[tokio::test]
    async fn test_config_without_webhook_only_logs() {
        let sink = crate::notification::from_config(&Default::default()).unwrap();
        assert!(sink.notify("[UPDATE] 1 (A) [2]3").await.is_ok());
    }
}
