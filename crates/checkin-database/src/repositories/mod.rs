//! Typed repositories over the document collections.

pub mod participant;
pub mod seat;
pub mod sign;

pub use participant::ParticipantRepository;
pub use seat::SeatRepository;
pub use sign::SignRepository;
