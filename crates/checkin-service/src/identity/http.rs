//! Identity resolution through the registration forms API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use checkin_core::config::external::IdentityConfig;
use checkin_core::error::{AppError, ErrorKind};
use checkin_core::result::AppResult;
use checkin_core::traits::{IdentityInfo, IdentityResolver};

/// Forms API response envelope.
#[derive(Debug, Deserialize)]
struct FormsResponse {
    #[serde(default)]
    data: Vec<FormEntry>,
}

#[derive(Debug, Deserialize)]
struct FormEntry {
    attributes: FormAttributes,
}

#[derive(Debug, Deserialize)]
struct FormAttributes {
    name: String,
}

/// Resolves identities with `GET {endpoint}?filters[studentId][$eq]={id}`.
///
/// When a participant submitted the form more than once, the last entry
/// wins. An empty `data` array means the id is unknown.
#[derive(Debug, Clone)]
pub struct HttpIdentityResolver {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpIdentityResolver {
    /// Creates a resolver from configuration. Requires an endpoint.
    pub fn new(config: &IdentityConfig) -> AppResult<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| AppError::configuration("identity.endpoint is not set"))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build identity HTTP client",
                    e,
                )
            })?;
        Ok(Self {
            client,
            endpoint,
            token: config.token.clone(),
        })
    }

    fn lookup_url(&self, external_id: i64) -> String {
        format!("{}?filters[studentId][$eq]={external_id}", self.endpoint)
    }
}

#[async_trait]
impl IdentityResolver for HttpIdentityResolver {
    async fn resolve(&self, external_id: i64) -> AppResult<Option<IdentityInfo>> {
        let mut request = self.client.get(self.lookup_url(external_id));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(external_id, error = %e, "Identity service request failed");
                AppError::with_source(ErrorKind::ExternalService, "identity service unavailable", e)
            })?;
        let body: FormsResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "identity service returned malformed data",
                e,
            )
        })?;

        let resolved = body
            .data
            .into_iter()
            .last()
            .map(|entry| IdentityInfo::new(entry.attributes.name));
        debug!(external_id, found = resolved.is_some(), "Identity resolved");
        Ok(resolved)
    }
}
