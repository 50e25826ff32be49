//! Sign record domain entities.

pub mod assignment;
pub mod model;

pub use assignment::SeatAssignment;
pub use model::SignRecord;
