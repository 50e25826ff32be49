//! Secondary-index keys for the document store.
//!
//! Each [`IndexKey`] variant names one index; composite indexes carry an
//! explicit key struct instead of a positional tuple so the field order
//! cannot be mixed up at a call site.

use serde::{Deserialize, Serialize};

use super::site::Site;

/// Composite key of a seat position: `(site, seat number)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteSeatKey {
    /// Exam site.
    pub site: Site,
    /// Seat number within the site.
    pub seat_no: u32,
}

impl SiteSeatKey {
    /// Creates a site/seat key.
    pub fn new(site: Site, seat_no: u32) -> Self {
        Self { site, seat_no }
    }
}

/// Composite key of the seat availability index: `(used, site)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UsedSiteKey {
    /// Whether the seat is taken.
    pub used: bool,
    /// Exam site.
    pub site: Site,
}

impl UsedSiteKey {
    /// Key selecting the free seats of a site.
    pub fn free(site: Site) -> Self {
        Self { used: false, site }
    }
}

/// A lookup key into one of the secondary indexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexKey {
    /// participant-by-external-id
    ParticipantExternalId(i64),
    /// participant-by-username
    ParticipantUsername(String),
    /// Blank participant slots not yet bound to an external id.
    ParticipantUnbound,
    /// sign-by-(site, seat)
    SignSiteSeat(SiteSeatKey),
    /// sign-by-token
    SignToken(String),
    /// seat-by-(used, site)
    SeatUsedSite(UsedSiteKey),
    /// seat-by-(site, seat number)
    SeatSiteSeatNo(SiteSeatKey),
}
