//! Check-in engine: idempotent sign-in, seat updates, lookups.

use std::sync::Arc;

use tracing::{debug, info, warn};

use checkin_core::error::AppError;
use checkin_core::events::CheckInEvent;
use checkin_core::result::AppResult;
use checkin_core::traits::{IdentityInfo, NotificationSink};
use checkin_core::types::{Site, SiteSeatKey};
use checkin_database::Database;
use checkin_entity::{PoolStats, SeatAssignment, SignInfo, SignRecord};

use super::lookup::LookupKey;
use crate::lock::WriterLock;
use crate::seat::SeatAllocator;
use crate::token::generate_token;

/// Owns the sign-in state machine.
///
/// Every mutating operation runs in a [`Transaction`](crate::lock::Transaction)
/// on the shared [`WriterLock`] and ends with a commit or a rollback of all
/// of its writes, even when the caller is cancelled. Notifications are
/// sent after the commit and after the lock is released; a delivery
/// failure is logged and never changes the outcome.
pub struct CheckInEngine {
    db: Arc<Database>,
    lock: Arc<WriterLock>,
    allocator: SeatAllocator,
    notifier: Arc<dyn NotificationSink>,
}

impl std::fmt::Debug for CheckInEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckInEngine")
            .field("db", &self.db)
            .field("lock", &self.lock)
            .finish_non_exhaustive()
    }
}

impl CheckInEngine {
    /// Creates a new check-in engine.
    pub fn new(
        db: Arc<Database>,
        lock: Arc<WriterLock>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            db,
            lock,
            allocator: SeatAllocator::new(),
            notifier,
        }
    }

    /// Check in `participant_id` at `site`.
    ///
    /// A participant who already has a sign record gets it back unchanged.
    /// Otherwise an unbound account slot is bound when needed, a seat is
    /// allocated (or the unassigned sentinel recorded when the site is
    /// full), and a sign record with a fresh token is created.
    pub async fn check_in(
        &self,
        participant_id: i64,
        site: Site,
        identity: &IdentityInfo,
    ) -> AppResult<SignInfo> {
        let txn = self.lock.begin(&self.db, "check_in").await?;
        let result = self.check_in_locked(participant_id, site, identity).await;
        let (info, events) = txn.finish(result).await?;

        self.publish(events).await;
        Ok(info)
    }

    async fn check_in_locked(
        &self,
        participant_id: i64,
        site: Site,
        identity: &IdentityInfo,
    ) -> AppResult<(SignInfo, Vec<CheckInEvent>)> {
        let participants = self.db.participants();
        let signs = self.db.signs();
        let mut events = Vec::new();

        if let Some(sign) = signs.find_by_participant(participant_id).await {
            let participant = participants
                .find_by_external_id(participant_id)
                .await
                .ok_or_else(|| AppError::not_found("no such user"))?;
            debug!(participant_id, "Already checked in");
            return Ok((SignInfo::new(&participant, Some(&sign)), events));
        }

        let participant = match participants.find_by_external_id(participant_id).await {
            Some(participant) => participant,
            None => {
                let mut slot = participants
                    .first_unbound()
                    .await
                    .ok_or_else(|| AppError::conflict("no account available"))?;
                slot.bind(participant_id, identity)?;
                participants.upsert(slot.clone()).await;
                info!(
                    slot = slot.slot,
                    participant_id,
                    username = %slot.username,
                    "Bound spare account"
                );
                events.push(CheckInEvent::SlotBound {
                    slot: slot.slot,
                    participant_id,
                });
                slot
            }
        };

        let seats = self.db.seats();
        let free = seats.find_free(site).await;
        let assignment = match self.allocator.pick(site, &free) {
            Some(mut seat) => {
                seat.used = true;
                let seat_no = seat.seat_no;
                seats.upsert(seat).await;
                SeatAssignment::Assigned(seat_no)
            }
            None => {
                warn!(participant_id, %site, "No free seat at site");
                SeatAssignment::Unassigned
            }
        };

        let sign = SignRecord::new(participant_id, site, assignment, generate_token());
        signs.upsert(sign.clone()).await;

        info!(
            participant_id,
            %site,
            seat = ?assignment.seat_no(),
            "Participant checked in"
        );
        events.push(CheckInEvent::Signed {
            participant_id,
            name: participant.display_name().to_string(),
            site,
            seat: assignment.seat_no(),
        });

        Ok((SignInfo::new(&participant, Some(&sign)), events))
    }

    /// Move a checked-in participant to `seat_no` at their site, and
    /// optionally replace the display name and the note.
    ///
    /// The previously held seat is freed. Fails with `Conflict` when
    /// another participant holds the target seat.
    pub async fn update_assignment(
        &self,
        participant_id: i64,
        seat_no: u32,
        name: Option<String>,
        note: Option<String>,
    ) -> AppResult<SignInfo> {
        let txn = self.lock.begin(&self.db, "update_assignment").await?;
        let result = self
            .update_locked(participant_id, seat_no, name, note)
            .await;
        let (info, event) = txn.finish(result).await?;

        self.publish(vec![event]).await;
        Ok(info)
    }

    async fn update_locked(
        &self,
        participant_id: i64,
        seat_no: u32,
        name: Option<String>,
        note: Option<String>,
    ) -> AppResult<(SignInfo, CheckInEvent)> {
        let participants = self.db.participants();
        let signs = self.db.signs();
        let seats = self.db.seats();

        let mut participant = participants
            .find_by_external_id(participant_id)
            .await
            .ok_or_else(|| AppError::not_found("no such user"))?;
        let mut sign = signs
            .find_by_participant(participant_id)
            .await
            .ok_or_else(|| AppError::not_found("no such sign"))?;

        let target = SiteSeatKey::new(sign.site, seat_no);
        let mut seat = seats
            .find_by_position(target)
            .await
            .ok_or_else(|| AppError::not_found("no such seat"))?;

        let taken = signs
            .find_all_by_position(target)
            .await
            .into_iter()
            .any(|holder| holder.participant_id != participant_id);
        if taken {
            return Err(AppError::conflict("seat already taken"));
        }

        if sign.position() != Some(target) {
            if let Some(previous) = sign.position() {
                if let Some(mut old) = seats.find_by_position(previous).await {
                    old.used = false;
                    seats.upsert(old).await;
                }
            }
            seat.used = true;
            seats.upsert(seat).await;
            sign.seat = SeatAssignment::Assigned(seat_no);
        }

        if let Some(name) = name {
            participant.name = Some(name);
            participants.upsert(participant.clone()).await;
        }
        if let Some(note) = note {
            sign.note = note;
        }
        signs.upsert(sign.clone()).await;

        info!(participant_id, site = %sign.site, seat_no, "Seat assignment updated");
        let event = CheckInEvent::Updated {
            participant_id,
            name: participant.display_name().to_string(),
            site: sign.site,
            seat: seat_no,
        };
        Ok((SignInfo::new(&participant, Some(&sign)), event))
    }

    /// Find a participant's merged record.
    ///
    /// By id, a participant who has not checked in is returned with empty
    /// sign fields.
    pub async fn lookup(&self, key: &LookupKey) -> AppResult<SignInfo> {
        debug!(%key, "Lookup");
        let participants = self.db.participants();
        let signs = self.db.signs();

        match key {
            LookupKey::Id(id) => {
                let participant = participants
                    .find_by_external_id(*id)
                    .await
                    .ok_or_else(|| AppError::not_found("no such user"))?;
                let sign = signs.find_by_participant(*id).await;
                Ok(SignInfo::new(&participant, sign.as_ref()))
            }
            LookupKey::Seat { seat_no, site } => {
                let sign = signs
                    .find_by_position(SiteSeatKey::new(*site, *seat_no))
                    .await
                    .ok_or_else(|| AppError::not_found("no record"))?;
                let participant = participants
                    .find_by_external_id(sign.participant_id)
                    .await
                    .ok_or_else(|| AppError::not_found("no such user"))?;
                Ok(SignInfo::new(&participant, Some(&sign)))
            }
            LookupKey::Username(username) => {
                let participant = participants
                    .find_by_username(username)
                    .await
                    .ok_or_else(|| AppError::not_found("no such username"))?;
                let sign = match participant.external_id {
                    Some(id) => signs.find_by_participant(id).await,
                    None => None,
                };
                Ok(SignInfo::new(&participant, sign.as_ref()))
            }
        }
    }

    /// Every checked-in participant, ordered by username.
    pub async fn list_signs(&self) -> AppResult<Vec<SignInfo>> {
        let participants = self.db.participants();
        let mut merged = Vec::new();
        for sign in self.db.signs().find_all().await {
            match participants.find_by_external_id(sign.participant_id).await {
                Some(participant) => merged.push(SignInfo::new(&participant, Some(&sign))),
                None => warn!(
                    participant_id = sign.participant_id,
                    "Sign record without participant"
                ),
            }
        }
        merged.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(merged)
    }

    /// Account and seat pool counters.
    pub async fn stats(&self) -> AppResult<PoolStats> {
        let participants = self.db.participants();
        let seats = self.db.seats();
        let total_participants = participants.count().await;
        Ok(PoolStats {
            bound_participants: total_participants - participants.count_unbound().await,
            total_participants,
            signs: self.db.signs().count().await,
            used_seats: seats.count_used().await,
            total_seats: seats.count().await,
        })
    }

    async fn publish(&self, events: Vec<CheckInEvent>) {
        for event in events {
            let line = event.to_string();
            if let Err(e) = self.notifier.notify(&line).await {
                warn!(error = %e, line = %line, "Failed to deliver notification");
            }
        }
    }
}
