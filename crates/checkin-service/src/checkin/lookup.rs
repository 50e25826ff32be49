//! Lookup keys accepted by the check-in engine.

use std::fmt;

use checkin_core::types::Site;

/// How to find a participant's merged record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// By external participant id.
    Id(i64),
    /// By the seat a sign record holds.
    Seat {
        /// Seat number.
        seat_no: u32,
        /// Exam site.
        site: Site,
    },
    /// By judge-system username.
    Username(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id={id}"),
            Self::Seat { seat_no, site } => write!(f, "seat={seat_no} site={site}"),
            Self::Username(username) => write!(f, "username={username}"),
        }
    }
}
