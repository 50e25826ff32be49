//! Identity resolution service contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Identity details of a participant, as reported by the registration system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInfo {
    /// Display name.
    pub name: String,
}

impl IdentityInfo {
    /// Creates identity details with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Looks up a participant's identity by external id.
///
/// `Ok(None)` means the registration system has no such participant;
/// `Err` is reserved for transport or protocol failures.
#[async_trait]
pub trait IdentityResolver: Send + Sync + 'static {
    /// Resolve the identity registered under `external_id`.
    async fn resolve(&self, external_id: i64) -> AppResult<Option<IdentityInfo>>;
}
