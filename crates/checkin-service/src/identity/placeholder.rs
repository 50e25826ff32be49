//! Placeholder identity resolver.

use async_trait::async_trait;

use checkin_core::result::AppResult;
use checkin_core::traits::{IdentityInfo, IdentityResolver};

/// Resolves every id to the name `backup_{id}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderIdentityResolver;

#[async_trait]
impl IdentityResolver for PlaceholderIdentityResolver {
    async fn resolve(&self, external_id: i64) -> AppResult<Option<IdentityInfo>> {
        Ok(Some(IdentityInfo::new(format!("backup_{external_id}"))))
    }
}
