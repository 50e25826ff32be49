//! Participant domain entities.

pub mod model;

pub use model::Participant;
