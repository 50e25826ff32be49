//! Sign record repository implementation.

use std::sync::Arc;

use checkin_core::types::{IndexKey, SiteSeatKey};
use checkin_entity::SignRecord;

use crate::store::Collection;

/// Repository for sign records.
#[derive(Debug, Clone)]
pub struct SignRepository {
    collection: Arc<Collection<SignRecord>>,
}

impl SignRepository {
    /// Create a new sign repository.
    pub fn new(collection: Arc<Collection<SignRecord>>) -> Self {
        Self { collection }
    }

    /// Find the sign record of an external participant id.
    pub async fn find_by_participant(&self, participant_id: i64) -> Option<SignRecord> {
        self.collection.get(&participant_id).await
    }

    /// Find the sign record holding a seat position.
    pub async fn find_by_position(&self, position: SiteSeatKey) -> Option<SignRecord> {
        self.collection
            .query(&IndexKey::SignSiteSeat(position))
            .await
            .into_iter()
            .next()
    }

    /// All sign records holding a seat position.
    pub async fn find_all_by_position(&self, position: SiteSeatKey) -> Vec<SignRecord> {
        self.collection.query(&IndexKey::SignSiteSeat(position)).await
    }

    /// Find the sign record carrying a live credential token.
    pub async fn find_by_token(&self, token: &str) -> Option<SignRecord> {
        self.collection
            .query(&IndexKey::SignToken(token.to_string()))
            .await
            .into_iter()
            .next()
    }

    /// Insert or replace a sign record.
    pub async fn upsert(&self, sign: SignRecord) {
        self.collection.upsert(sign).await;
    }

    /// All sign records.
    pub async fn find_all(&self) -> Vec<SignRecord> {
        self.collection.all().await
    }

    /// Count sign records.
    pub async fn count(&self) -> u64 {
        self.collection.count().await
    }
}
