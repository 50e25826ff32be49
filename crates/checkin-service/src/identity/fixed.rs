//! Fixed-table identity resolver.

use std::collections::HashMap;

use async_trait::async_trait;

use checkin_core::result::AppResult;
use checkin_core::traits::{IdentityInfo, IdentityResolver};

/// Resolves ids from an in-memory table; unknown ids resolve to `None`.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityResolver {
    names: HashMap<i64, String>,
}

impl StaticIdentityResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn with(mut self, external_id: i64, name: impl Into<String>) -> Self {
        self.names.insert(external_id, name.into());
        self
    }
}

#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve(&self, external_id: i64) -> AppResult<Option<IdentityInfo>> {
        Ok(self.names.get(&external_id).map(IdentityInfo::new))
    }
}
