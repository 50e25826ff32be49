//! Merged views returned by check-in operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use checkin_core::types::Site;

use crate::participant::Participant;
use crate::sign::{SeatAssignment, SignRecord};

/// A participant joined with their sign record.
///
/// Sign fields are absent for a participant who has not checked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInfo {
    /// External participant id.
    pub id: Option<i64>,
    /// Display name.
    pub name: Option<String>,
    /// Judge-system username.
    pub username: String,
    /// Judge-system password.
    pub password: String,
    /// Exam site.
    pub site: Option<Site>,
    /// Assigned seat (`-1` when none was available).
    pub seat: Option<SeatAssignment>,
    /// Time of the first check-in.
    pub time: Option<DateTime<Utc>>,
    /// Operator note.
    pub note: Option<String>,
    /// Live credential token.
    pub qrcode: Option<String>,
}

impl SignInfo {
    /// Joins a participant with their sign record, if any.
    pub fn new(participant: &Participant, sign: Option<&SignRecord>) -> Self {
        Self {
            id: participant.external_id,
            name: participant.name.clone(),
            username: participant.username.clone(),
            password: participant.password.clone(),
            site: sign.map(|s| s.site),
            seat: sign.map(|s| s.seat),
            time: sign.map(|s| s.checked_in_at),
            note: sign.map(|s| s.note.clone()),
            qrcode: sign.and_then(|s| s.token.clone()),
        }
    }
}

/// Counts summarizing the account and seat pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolStats {
    /// Accounts bound to a participant.
    pub bound_participants: u64,
    /// All provisioned accounts.
    pub total_participants: u64,
    /// Sign records.
    pub signs: u64,
    /// Seats marked used.
    pub used_seats: u64,
    /// All provisioned seats.
    pub total_seats: u64,
}
