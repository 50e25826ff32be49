//! Seat assignment value carried by a sign record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seat a sign record holds.
///
/// Serialized as the seat number, or `-1` when the site was full at
/// check-in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum SeatAssignment {
    /// Seat number within the sign's site.
    Assigned(u32),
    /// No seat was available.
    Unassigned,
}

impl SeatAssignment {
    /// Wire value of [`SeatAssignment::Unassigned`].
    pub const SENTINEL: i64 = -1;

    /// The seat number, if one is assigned.
    pub fn seat_no(self) -> Option<u32> {
        match self {
            Self::Assigned(no) => Some(no),
            Self::Unassigned => None,
        }
    }

    /// Whether a seat is assigned.
    pub fn is_assigned(self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

impl From<Option<u32>> for SeatAssignment {
    fn from(seat: Option<u32>) -> Self {
        seat.map_or(Self::Unassigned, Self::Assigned)
    }
}

impl From<i64> for SeatAssignment {
    fn from(raw: i64) -> Self {
        u32::try_from(raw).map_or(Self::Unassigned, Self::Assigned)
    }
}

impl From<SeatAssignment> for i64 {
    fn from(seat: SeatAssignment) -> Self {
        match seat {
            SeatAssignment::Assigned(no) => i64::from(no),
            SeatAssignment::Unassigned => SeatAssignment::SENTINEL,
        }
    }
}

impl fmt::Display for SeatAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i64::from(*self))
    }
}
