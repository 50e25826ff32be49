//! [`Document`] implementations for the check-in entities.

use checkin_core::types::{IndexKey, UsedSiteKey};
use checkin_entity::{Participant, Seat, SignRecord};

use crate::store::Document;

impl Document for Participant {
    type Key = u32;

    const COLLECTION: &'static str = "participant";

    fn key(&self) -> u32 {
        self.slot
    }

    fn index_keys(&self) -> Vec<IndexKey> {
        let binding = match self.external_id {
            Some(id) => IndexKey::ParticipantExternalId(id),
            None => IndexKey::ParticipantUnbound,
        };
        vec![binding, IndexKey::ParticipantUsername(self.username.clone())]
    }
}

impl Document for SignRecord {
    type Key = i64;

    const COLLECTION: &'static str = "sign";

    fn key(&self) -> i64 {
        self.participant_id
    }

    fn index_keys(&self) -> Vec<IndexKey> {
        let mut keys = Vec::with_capacity(2);
        if let Some(position) = self.position() {
            keys.push(IndexKey::SignSiteSeat(position));
        }
        if let Some(token) = &self.token {
            keys.push(IndexKey::SignToken(token.clone()));
        }
        keys
    }
}

impl Document for Seat {
    type Key = u32;

    const COLLECTION: &'static str = "seat";

    fn key(&self) -> u32 {
        self.id
    }

    fn index_keys(&self) -> Vec<IndexKey> {
        vec![
            IndexKey::SeatUsedSite(UsedSiteKey {
                used: self.used,
                site: self.site,
            }),
            IndexKey::SeatSiteSeatNo(self.position()),
        ]
    }
}
