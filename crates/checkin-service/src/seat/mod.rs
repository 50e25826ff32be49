//! Seat selection.

pub mod allocator;

pub use allocator::{SeatAllocator, pick_seat};
