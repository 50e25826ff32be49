//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Which snapshot backend the document store persists to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// JSON snapshot file replaced atomically on every commit.
    #[default]
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Snapshot backend.
    #[serde(default)]
    pub backend: StoreBackend,
    /// Snapshot file path (file backend only).
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "data/data.json".to_string()
}
