//! Issue and redeem one-time credential tokens.

use std::sync::Arc;

use tracing::info;

use checkin_core::error::AppError;
use checkin_core::result::AppResult;
use checkin_database::Database;
use checkin_entity::SignInfo;

use super::generator::generate_token;
use crate::lock::WriterLock;

/// One-time credential tokens attached to sign records.
///
/// A sign record holds at most one live token. Issuing replaces it;
/// redeeming consumes it. Both run under the writer lock.
#[derive(Debug, Clone)]
pub struct TokenStore {
    db: Arc<Database>,
    lock: Arc<WriterLock>,
}

impl TokenStore {
    /// Creates a token store.
    pub fn new(db: Arc<Database>, lock: Arc<WriterLock>) -> Self {
        Self { db, lock }
    }

    /// Attach a fresh token to the participant's sign record, invalidating
    /// any previous one.
    pub async fn issue(&self, participant_id: i64) -> AppResult<String> {
        let txn = self.lock.begin(&self.db, "issue_token").await?;
        let result = self.issue_locked(participant_id).await;
        txn.finish(result).await
    }

    async fn issue_locked(&self, participant_id: i64) -> AppResult<String> {
        let signs = self.db.signs();
        let mut sign = signs
            .find_by_participant(participant_id)
            .await
            .ok_or_else(|| AppError::not_found("no such sign"))?;

        let token = generate_token();
        sign.token = Some(token.clone());
        signs.upsert(sign).await;

        info!(participant_id, "Credential token issued");
        Ok(token)
    }

    /// Consume `token`, returning the holder's merged record.
    ///
    /// The token is cleared before this returns, so a second redemption
    /// fails with `NotFound`.
    pub async fn redeem(&self, token: &str) -> AppResult<SignInfo> {
        let txn = self.lock.begin(&self.db, "redeem_token").await?;
        let result = self.redeem_locked(token).await;
        txn.finish(result).await
    }

    async fn redeem_locked(&self, token: &str) -> AppResult<SignInfo> {
        let signs = self.db.signs();
        let mut sign = signs
            .find_by_token(token)
            .await
            .ok_or_else(|| AppError::not_found("qrcode not found"))?;
        let participant = self
            .db
            .participants()
            .find_by_external_id(sign.participant_id)
            .await
            .ok_or_else(|| AppError::not_found("no such user"))?;

        sign.token = None;
        let info = SignInfo::new(&participant, Some(&sign));
        signs.upsert(sign).await;

        info!(
            participant_id = info.id,
            username = %info.username,
            "Credential token redeemed"
        );
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use checkin_core::error::ErrorKind;
    use checkin_core::types::Site;
    use checkin_database::Snapshot;
    use checkin_entity::{Participant, SeatAssignment, SignRecord};

    async fn store() -> (TokenStore, Arc<Database>) {
        let mut bound = Participant::blank(1, "oj001", "pw1");
        bound.external_id = Some(1001);
        bound.name = Some("A".to_string());
        let mut unsigned = Participant::blank(2, "oj002", "pw2");
        unsigned.external_id = Some(1002);

        let snapshot = Snapshot {
            participants: vec![bound, unsigned],
            signs: vec![SignRecord::new(
                1001,
                Site::One,
                SeatAssignment::Assigned(3),
                "initial".to_string(),
            )],
            seats: Vec::new(),
        };
        let db = Arc::new(Database::in_memory(snapshot).await.unwrap());
        let store = TokenStore::new(Arc::clone(&db), Arc::new(WriterLock::default()));
        (store, db)
    }

    #[tokio::test]
    async fn test_redeem_is_single_use() {
        let (store, db) = store().await;
        let token = store.issue(1001).await.unwrap();

        let info = store.redeem(&token).await.unwrap();
        assert_eq!(info.username, "oj001");
        assert_eq!(info.password, "pw1");
        assert_eq!(info.seat, Some(SeatAssignment::Assigned(3)));
        assert!(info.qrcode.is_none());

        let err = store.redeem(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "qrcode not found");
        assert!(db.signs().find_by_participant(1001).await.unwrap().token.is_none());
    }

    #[tokio::test]
    async fn test_issue_invalidates_previous_token() {
        let (store, _db) = store().await;
        let fresh = store.issue(1001).await.unwrap();
        assert_ne!(fresh, "initial");

        assert_eq!(
            store.redeem("initial").await.unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert!(store.redeem(&fresh).await.is_ok());
    }

    #[tokio::test]
    async fn test_issue_without_sign() {
        let (store, _db) = store().await;
        let err = store.issue(1002).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "no such sign");

        assert_eq!(store.issue(9999).await.unwrap_err().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_redeem_unknown_token() {
        let (store, _db) = store().await;
        let err = store.redeem("deadbeef").await.unwrap_err();
        assert_eq!(err.message, "qrcode not found");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_redeems_admit_one() {
        let (store, db) = store().await;
        let token = store.issue(1001).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            let token = token.clone();
            handles.push(tokio::spawn(async move { store.redeem(&token).await }));
        }
        let mut redeemed = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(info) => {
                    assert_eq!(info.username, "oj001");
                    redeemed += 1;
                }
                Err(e) => {
                    assert_eq!(e.kind, ErrorKind::NotFound);
                    assert_eq!(e.message, "qrcode not found");
                }
            }
        }

        assert_eq!(redeemed, 1);
        assert!(db.signs().find_by_participant(1001).await.unwrap().token.is_none());
    }
}
