//! Check-in and seat update events.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::site::Site;

/// Outcome of a mutating check-in operation, rendered for notification sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckInEvent {
    /// A blank account slot was bound to a participant.
    SlotBound {
        /// Slot number of the bound account.
        slot: u32,
        /// External participant id.
        participant_id: i64,
    },
    /// A participant checked in for the first time.
    Signed {
        /// External participant id.
        participant_id: i64,
        /// Display name.
        name: String,
        /// Exam site.
        site: Site,
        /// Assigned seat, `None` when the site was full.
        seat: Option<u32>,
    },
    /// An operator moved a participant to another seat.
    Updated {
        /// External participant id.
        participant_id: i64,
        /// Display name.
        name: String,
        /// Exam site.
        site: Site,
        /// New seat.
        seat: u32,
    },
}

impl fmt::Display for CheckInEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotBound {
                slot,
                participant_id,
            } => write!(f, "[BACKUP_USER] {slot} -> {participant_id}"),
            Self::Signed {
                participant_id,
                name,
                site,
                seat,
            } => match seat {
                Some(seat) => write!(f, "[SIGN] {participant_id} ({name}) [{site}]{seat}"),
                None => write!(f, "[SIGN] {participant_id} ({name}) [{site}]no seat"),
            },
            Self::Updated {
                participant_id,
                name,
                site,
                seat,
            } => write!(f, "[UPDATE] {participant_id} ({name}) [{site}]{seat}"),
        }
    }
}
