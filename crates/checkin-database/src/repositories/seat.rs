//! Seat repository implementation.

use std::sync::Arc;

use checkin_core::types::{IndexKey, Site, SiteSeatKey, UsedSiteKey};
use checkin_entity::Seat;

use crate::store::Collection;

/// Repository for seats.
#[derive(Debug, Clone)]
pub struct SeatRepository {
    collection: Arc<Collection<Seat>>,
}

impl SeatRepository {
    /// Create a new seat repository.
    pub fn new(collection: Arc<Collection<Seat>>) -> Self {
        Self { collection }
    }

    /// Find a seat by document key.
    pub async fn find_by_id(&self, id: u32) -> Option<Seat> {
        self.collection.get(&id).await
    }

    /// Free seats of a site.
    pub async fn find_free(&self, site: Site) -> Vec<Seat> {
        self.collection
            .query(&IndexKey::SeatUsedSite(UsedSiteKey::free(site)))
            .await
    }

    /// Find a seat by its `(site, seat number)` position.
    pub async fn find_by_position(&self, position: SiteSeatKey) -> Option<Seat> {
        self.collection
            .query(&IndexKey::SeatSiteSeatNo(position))
            .await
            .into_iter()
            .next()
    }

    /// Insert or replace a seat.
    pub async fn upsert(&self, seat: Seat) {
        self.collection.upsert(seat).await;
    }

    /// Count all seats.
    pub async fn count(&self) -> u64 {
        self.collection.count().await
    }

    /// Count used seats across all sites.
    pub async fn count_used(&self) -> u64 {
        let mut used = 0;
        for site in Site::ALL {
            used += self
                .collection
                .count_by(&IndexKey::SeatUsedSite(UsedSiteKey { used: true, site }))
                .await;
        }
        used
    }
}
