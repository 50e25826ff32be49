//! One-time credential page configuration.

use serde::{Deserialize, Serialize};

/// Content of the page rendered when a credential token is redeemed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrcodeConfig {
    /// Page heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// Address of the judge system the credentials log into.
    #[serde(default = "default_oj_url")]
    pub oj_url: String,
}

impl Default for QrcodeConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            oj_url: default_oj_url(),
        }
    }
}

fn default_title() -> String {
    "Exam Information".to_string()
}

fn default_oj_url() -> String {
    "https://csd.moe/oj".to_string()
}
