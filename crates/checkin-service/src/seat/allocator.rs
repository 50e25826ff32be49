//! Priority-tiered random seat allocator.

use rand::Rng;
use rand::seq::SliceRandom;

use checkin_core::types::Site;
use checkin_entity::Seat;

/// Picks a free seat of `site` from `pool`.
///
/// Only seats with the lowest priority value among the free seats of the
/// site are candidates, and each candidate is equally likely. Returns
/// `None` when the site has no free seat. The pool is not modified.
pub fn pick_seat<'a, R>(site: Site, pool: &'a [Seat], rng: &mut R) -> Option<&'a Seat>
where
    R: Rng + ?Sized,
{
    let open: Vec<&Seat> = pool.iter().filter(|s| !s.used && s.site == site).collect();
    let best = open.iter().map(|s| s.priority).min()?;
    let tier: Vec<&Seat> = open.into_iter().filter(|s| s.priority == best).collect();
    tier.choose(rng).copied()
}

/// Seat allocator drawing from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatAllocator;

impl SeatAllocator {
    /// Creates a seat allocator.
    pub fn new() -> Self {
        Self
    }

    /// Picks a free seat of `site` from `pool`, see [`pick_seat`].
    pub fn pick(&self, site: Site, pool: &[Seat]) -> Option<Seat> {
        pick_seat(site, pool, &mut rand::thread_rng()).cloned()
    }
}
