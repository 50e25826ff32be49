//! Participant repository implementation.

use std::sync::Arc;

use checkin_core::types::IndexKey;
use checkin_entity::Participant;

use crate::store::Collection;

/// Repository for account slots and their bindings.
#[derive(Debug, Clone)]
pub struct ParticipantRepository {
    collection: Arc<Collection<Participant>>,
}

impl ParticipantRepository {
    /// Create a new participant repository.
    pub fn new(collection: Arc<Collection<Participant>>) -> Self {
        Self { collection }
    }

    /// Find the account bound to an external participant id.
    pub async fn find_by_external_id(&self, external_id: i64) -> Option<Participant> {
        self.collection
            .query(&IndexKey::ParticipantExternalId(external_id))
            .await
            .into_iter()
            .next()
    }

    /// Find an account by judge-system username.
    pub async fn find_by_username(&self, username: &str) -> Option<Participant> {
        self.collection
            .query(&IndexKey::ParticipantUsername(username.to_string()))
            .await
            .into_iter()
            .next()
    }

    /// The lowest-numbered blank slot, if any remain.
    pub async fn first_unbound(&self) -> Option<Participant> {
        self.collection
            .query(&IndexKey::ParticipantUnbound)
            .await
            .into_iter()
            .next()
    }

    /// Insert or replace an account slot.
    pub async fn upsert(&self, participant: Participant) {
        self.collection.upsert(participant).await;
    }

    /// Count all account slots.
    pub async fn count(&self) -> u64 {
        self.collection.count().await
    }

    /// Count blank slots.
    pub async fn count_unbound(&self) -> u64 {
        self.collection.count_by(&IndexKey::ParticipantUnbound).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::traits::IdentityInfo;

    fn repo() -> ParticipantRepository {
        let mut bound = Participant::blank(1, "oj001", "pw1");
        bound.bind(1001, &IdentityInfo::new("A")).unwrap();
        ParticipantRepository::new(Arc::new(Collection::from_documents(vec![
            bound,
            Participant::blank(3, "oj003", "pw3"),
            Participant::blank(2, "oj002", "pw2"),
        ])))
    }

    #[tokio::test]
    async fn test_find_by_external_id_and_username() {
        let repo = repo();
        assert_eq!(repo.find_by_external_id(1001).await.unwrap().slot, 1);
        assert!(repo.find_by_external_id(1002).await.is_none());
        assert_eq!(repo.find_by_username("oj003").await.unwrap().slot, 3);
    }

    #[tokio::test]
    async fn test_first_unbound_is_lowest_slot() {
        let repo = repo();
        assert_eq!(repo.first_unbound().await.unwrap().slot, 2);
        assert_eq!(repo.count_unbound().await, 2);

        let mut slot = repo.first_unbound().await.unwrap();
        slot.bind(1002, &IdentityInfo::new("B")).unwrap();
        repo.upsert(slot).await;
        assert_eq!(repo.first_unbound().await.unwrap().slot, 3);
        assert_eq!(repo.find_by_external_id(1002).await.unwrap().slot, 2);
    }
}
