//! Sign record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use checkin_core::types::{Site, SiteSeatKey};

use super::assignment::SeatAssignment;

/// The durable record of a participant's check-in.
///
/// Created exactly once per external participant id and never deleted by
/// the check-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRecord {
    /// External participant id (document key).
    pub participant_id: i64,
    /// Exam site.
    pub site: Site,
    /// Assigned seat.
    pub seat: SeatAssignment,
    /// Time of the first check-in.
    pub checked_in_at: DateTime<Utc>,
    /// Free-form operator note.
    #[serde(default)]
    pub note: String,
    /// Live, unredeemed credential token.
    #[serde(default)]
    pub token: Option<String>,
}

impl SignRecord {
    /// Creates a sign record stamped with the current time.
    pub fn new(participant_id: i64, site: Site, seat: SeatAssignment, token: String) -> Self {
        Self {
            participant_id,
            site,
            seat,
            checked_in_at: Utc::now(),
            note: String::new(),
            token: Some(token),
        }
    }

    /// The seat position held, if a seat is assigned.
    pub fn position(&self) -> Option<SiteSeatKey> {
        self.seat
            .seat_no()
            .map(|seat_no| SiteSeatKey::new(self.site, seat_no))
    }
}
