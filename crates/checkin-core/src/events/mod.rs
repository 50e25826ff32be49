//! Domain events emitted by the check-in engine.

pub mod checkin;

pub use checkin::CheckInEvent;
