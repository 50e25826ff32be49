//! Seat entity model.

use serde::{Deserialize, Serialize};

use checkin_core::types::{Site, SiteSeatKey};

/// An allocatable seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Document key.
    pub id: u32,
    /// Exam site.
    pub site: Site,
    /// Seat number, unique within the site.
    pub seat_no: u32,
    /// Priority tier; lower tiers are allocated first.
    pub priority: i32,
    /// Whether a sign record holds this seat.
    pub used: bool,
}

impl Seat {
    /// Creates a free seat.
    pub fn new(id: u32, site: Site, seat_no: u32, priority: i32) -> Self {
        Self {
            id,
            site,
            seat_no,
            priority,
            used: false,
        }
    }

    /// The seat's `(site, seat number)` position.
    pub fn position(&self) -> SiteSeatKey {
        SiteSeatKey::new(self.site, self.seat_no)
    }
}
