//! Writer lock configuration.

use serde::{Deserialize, Serialize};

/// Writer lock observability and wait settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockConfig {
    /// Wait or hold times above this many milliseconds are logged.
    #[serde(default = "default_slow_threshold")]
    pub slow_threshold_ms: u64,
    /// Upper bound on the time a mutating request waits for the lock.
    /// `None` waits indefinitely.
    #[serde(default)]
    pub acquire_timeout_ms: Option<u64>,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            slow_threshold_ms: default_slow_threshold(),
            acquire_timeout_ms: None,
        }
    }
}

fn default_slow_threshold() -> u64 {
    100
}
