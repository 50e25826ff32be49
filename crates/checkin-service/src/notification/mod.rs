//! Notification sinks for check-in and update events.

pub mod fanout;
pub mod log;
pub mod memory;
pub mod webhook;

use std::sync::Arc;

use checkin_core::config::external::NotifyConfig;
use checkin_core::result::AppResult;
use checkin_core::traits::NotificationSink;

pub use fanout::FanoutNotifier;
pub use log::LogNotifier;
pub use memory::MemoryNotifier;
pub use webhook::WebhookNotifier;

/// Build the sink set selected by configuration: always the log sink,
/// plus the webhook when a URL is configured.
pub fn from_config(config: &NotifyConfig) -> AppResult<Arc<dyn NotificationSink>> {
    let mut sinks: Vec<Arc<dyn NotificationSink>> = vec![Arc::new(LogNotifier)];
    if config.webhook_url.is_some() {
        sinks.push(Arc::new(WebhookNotifier::new(config)?));
    }
    Ok(Arc::new(FanoutNotifier::new(sinks)))
}
