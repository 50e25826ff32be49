//! Seat domain entities.

pub mod model;

pub use model::Seat;
