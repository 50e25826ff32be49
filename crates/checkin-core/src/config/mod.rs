//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a serde default, so a missing file or an
//! empty section yields a runnable configuration.

pub mod app;
pub mod external;
pub mod lock;
pub mod logging;
pub mod qrcode;
pub mod store;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::external::{IdentityConfig, NotifyConfig};
use self::lock::LockConfig;
use self::logging::LoggingConfig;
use self::qrcode::QrcodeConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (base file + environment overlay) and
/// `CHECKIN__*` environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Writer lock settings.
    #[serde(default)]
    pub lock: LockConfig,
    /// Identity resolution service settings.
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Notification sink settings.
    #[serde(default)]
    pub notify: NotifyConfig,
    /// One-time credential page settings.
    #[serde(default)]
    pub qrcode: QrcodeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `path` with an environment-specific overlay
    /// (`config/{env}.toml`) and environment variables prefixed with
    /// `CHECKIN__`. Missing files are skipped.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CHECKIN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
