//! # checkin-entity
//!
//! Domain entity models for the exam check-in service. Every persisted
//! struct in this crate is one document of the document store; the
//! projection types are the merged views returned to callers. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod participant;
pub mod projection;
pub mod seat;
pub mod sign;

pub use participant::Participant;
pub use projection::{PoolStats, SignInfo};
pub use seat::Seat;
pub use sign::{SeatAssignment, SignRecord};
