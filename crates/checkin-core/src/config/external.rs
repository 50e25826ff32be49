//! Identity service and notification sink configuration.

use serde::{Deserialize, Serialize};

/// Identity resolution service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Forms API endpoint, e.g. `http://forms.example/api/forms`.
    /// When absent, participants are named with a placeholder.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bearer token sent to the forms API.
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_identity_timeout")]
    pub timeout_seconds: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            timeout_seconds: default_identity_timeout(),
        }
    }
}

/// Notification sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Webhook receiving `{"text": ...}` for every check-in and update.
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_notify_timeout")]
    pub timeout_seconds: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_seconds: default_notify_timeout(),
        }
    }
}

fn default_identity_timeout() -> u64 {
    10
}

fn default_notify_timeout() -> u64 {
    5
}
