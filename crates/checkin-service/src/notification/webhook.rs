//! Chat webhook notification sink.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use checkin_core::config::external::NotifyConfig;
use checkin_core::error::{AppError, ErrorKind};
use checkin_core::result::AppResult;
use checkin_core::traits::NotificationSink;

/// POSTs `{"text": line}` to a webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    /// Creates a webhook sink from configuration. Requires a URL.
    pub fn new(config: &NotifyConfig) -> AppResult<Self> {
        let url = config
            .webhook_url
            .clone()
            .ok_or_else(|| AppError::configuration("notify.webhook_url is not set"))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build webhook HTTP client",
                    e,
                )
            })?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl NotificationSink for WebhookNotifier {
    async fn notify(&self, line: &str) -> AppResult<()> {
        self.client
            .post(&self.url)
            .json(&json!({ "text": line }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::with_source(ErrorKind::ExternalService, "webhook delivery failed", e))?;
        debug!(url = %self.url, "Webhook notified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::Router;
    use axum::extract::State;
    use axum::routing::post;
    use serde_json::Value;
    use tokio::sync::Mutex;

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn hook(State(received): State<Received>, axum::Json(body): axum::Json<Value>) {
        received.lock().await.push(body);
    }

    #[tokio::test]
    async fn test_posts_text_payload() {
        let received: Received = Arc::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .route("/hook", post(hook))
            .with_state(Arc::clone(&received));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let notifier = WebhookNotifier::new(&NotifyConfig {
            webhook_url: Some(format!("http://{addr}/hook")),
            timeout_seconds: 5,
        })
        .unwrap();
        notifier.notify("[SIGN] 1001 (A) [1]7").await.unwrap();

        let received = received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["text"], "[SIGN] 1001 (A) [1]7");
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_external_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let notifier = WebhookNotifier::new(&NotifyConfig {
            webhook_url: Some(format!("http://{addr}/hook")),
            timeout_seconds: 1,
        })
        .unwrap();
        let err = notifier.notify("line").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExternalService);
    }
}
